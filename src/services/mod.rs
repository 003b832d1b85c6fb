pub mod energy_balance;
pub mod evaluation;
pub mod production;
pub mod shading;
pub mod solar_geometry;
pub mod validation;
