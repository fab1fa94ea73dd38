use engine_logging::{engine_info, engine_warn, redacted};
use estimator_core::{Effect, Msg};
use estimator_engine::{ConnectorSettings, EngineEvent, EngineHandle};

pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(settings: ConnectorSettings) -> Self {
        Self {
            engine: EngineHandle::new(settings),
        }
    }

    /// Hands effects to the engine. Effects the engine could not accept come
    /// back as messages so the state machine never waits on them.
    pub fn run(&self, effects: Vec<Effect>) -> Vec<Msg> {
        let mut rejected = Vec::new();
        for effect in effects {
            match effect {
                Effect::Connect {
                    request_id,
                    token,
                    dataset_id,
                } => {
                    engine_info!(
                        "Connect request_id={} dataset_id={} token={}",
                        request_id,
                        dataset_id,
                        redacted(&token)
                    );
                    if let Err(err) = self.engine.connect(request_id, token, dataset_id) {
                        rejected.push(map_event(EngineEvent::ConnectCompleted {
                            request_id,
                            result: Err(err),
                        }));
                    }
                }
            }
        }
        rejected
    }

    /// Collects engine completions as messages for the state machine.
    pub fn drain_messages(&self) -> Vec<Msg> {
        let mut inbox = Vec::new();
        while let Some(event) = self.engine.try_recv() {
            inbox.push(map_event(event));
        }
        inbox
    }
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::ConnectCompleted { request_id, result } => match result {
            Ok(project_types) => Msg::ConnectSucceeded {
                request_id,
                project_types,
            },
            Err(err) => {
                engine_warn!("Connect request {} failed: {:?}", request_id, err);
                Msg::ConnectFailed {
                    request_id,
                    message: err.to_string(),
                }
            }
        },
    }
}
