pub mod states;
pub mod params;
pub mod geometry;
pub mod forces;
pub mod kinematics;
pub mod integrator;
pub mod driver;
pub mod progress;
pub mod diagnostics;
pub mod scenario;
