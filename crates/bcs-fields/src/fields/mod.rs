//! One builder per solver field.

mod epsilon;
mod k;
mod nu_tilda;
mod nut;
mod omega;
mod pressure;
mod shared;
mod temperature;
mod velocity;

pub use epsilon::Epsilon;
pub use k::TurbulentKineticEnergy;
pub use nu_tilda::NuTilda;
pub use nut::TurbulentViscosity;
pub use omega::Omega;
pub use pressure::Pressure;
pub use temperature::Temperature;
pub use velocity::Velocity;
