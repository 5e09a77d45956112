mod clock;
mod orbit;
mod spin;
mod systems;
mod tilt;

pub use clock::{DayCycle, SimClock};
pub use systems::{advance_sim_clock, spin_cube_system, update_flower_tilt_system, update_sun_system};
