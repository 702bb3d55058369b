pub mod simulation;
pub mod configuration;
pub mod error;

pub use simulation::states::{History, NMat3xN, NMatN, NVec3, NVecN, PairTensor3, Snapshot, SystemState};
pub use simulation::geometry::{calc_diff, get_mass_matrix};
pub use simulation::forces::{gravity_force, gravity_potential};
pub use simulation::kinematics::{calc_acceleration, kinetic_energy, total_momentum, zero_momentum_frame};
pub use simulation::integrator::{integration_step, round_value};
pub use simulation::driver::{simulate, simulate_with_progress, step_count};
pub use simulation::params::Parameters;
pub use simulation::progress::{LogProgress, NoProgress, ProgressBar, ProgressSink};
pub use simulation::scenario::Scenario;

pub use configuration::config::{BodyConfig, ParametersConfig, ScenarioConfig};

pub use error::{Error, Result};
