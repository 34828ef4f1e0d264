use std::sync::Arc;

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::config::{City, LocationConfig};
use crate::flow::{effects, Actor, Effects};
use crate::modules::{Location, LocationMode, LocationPrivacyModule, ModuleError};

use super::action::FakeLocationAction;
use super::effect::FakeLocationEffect;
use super::state::FakeLocationState;

pub struct FakeLocationActor {
    module: Arc<dyn LocationPrivacyModule>,
    cities: Vec<City>,
    rng: Mutex<StdRng>,
}

impl FakeLocationActor {
    pub fn new(module: Arc<dyn LocationPrivacyModule>, config: &LocationConfig) -> Self {
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            module,
            cities: config.random_cities.clone(),
            rng: Mutex::new(rng),
        }
    }

    fn pick_city(&self) -> Option<City> {
        self.cities.choose(&mut *self.rng.lock()).cloned()
    }
}

impl Actor for FakeLocationActor {
    type State = FakeLocationState;
    type Action = FakeLocationAction;
    type Effect = FakeLocationEffect;

    fn act(&self, _state: Self::State, action: Self::Action) -> Effects<Self::Effect> {
        let module = Arc::clone(&self.module);
        match action {
            FakeLocationAction::Init => effects::once(async move {
                match module.fake_location_state().await {
                    Ok(current) => FakeLocationEffect::LocationModeUpdated {
                        mode: current.mode,
                        location: current.location,
                    },
                    Err(err) => failure("Can't read location mode", err),
                }
            }),
            FakeLocationAction::UseRealLocation => effects::once(async move {
                match module.use_real_location().await {
                    Ok(()) => FakeLocationEffect::LocationModeUpdated {
                        mode: LocationMode::Real,
                        location: None,
                    },
                    Err(err) => failure("Can't use real location", err),
                }
            }),
            FakeLocationAction::UseRandomLocation => {
                let Some(city) = self.pick_city() else {
                    return effects::just(FakeLocationEffect::Error(
                        "No random location available".to_string(),
                    ));
                };
                tracing::debug!(city = %city.name, "Random city picked");
                let location = city.location();
                effects::once(async move {
                    fake(module.as_ref(), LocationMode::Random, location).await
                })
            }
            FakeLocationAction::SetSpecificLocation {
                latitude,
                longitude,
            } => {
                let location = Location::new(latitude, longitude);
                if !location.is_valid() {
                    return effects::just(FakeLocationEffect::Error(
                        "Invalid coordinates".to_string(),
                    ));
                }
                effects::once(async move {
                    fake(module.as_ref(), LocationMode::Custom, location).await
                })
            }
        }
    }
}

async fn fake(
    module: &dyn LocationPrivacyModule,
    mode: LocationMode,
    location: Location,
) -> FakeLocationEffect {
    match module.use_fake_location(mode, location).await {
        Ok(()) => FakeLocationEffect::LocationModeUpdated {
            mode,
            location: Some(location),
        },
        Err(err) => failure("Can't set fake location", err),
    }
}

fn failure(message: &str, err: ModuleError) -> FakeLocationEffect {
    tracing::warn!(error = %err, "{}", message);
    FakeLocationEffect::Error(message.to_string())
}
