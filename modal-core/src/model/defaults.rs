//! reference values used by the no-argument constructors of each transport kind.

pub const ROAD_PRICE_PER_KM: f64 = 0.075;
pub const ROAD_CAPACITY: f64 = 35.0;
pub const ROAD_SPEED: f64 = 60.0;

pub const RAIL_PRICE_PER_KM: f64 = 0.05;
pub const RAIL_CAPACITY: f64 = 70000.0;
pub const RAIL_SPEED: f64 = 20.0;

pub const WATERWAY_PRICE_PER_KM: f64 = 0.04375;
pub const WATERWAY_CAPACITY: f64 = 1000.0;
pub const WATERWAY_SPEED: f64 = 40.0;

pub const AIR_PRICE_PER_KM: f64 = 0.1;
pub const AIR_CAPACITY: f64 = 100.0;
pub const AIR_SPEED: f64 = 800.0;

/// distance used by the base (kind-agnostic) default, which is a road leg.
pub const BASE_DISTANCE: u64 = 100;

/// distance used by the default constructor of every specific kind.
pub const VARIANT_DISTANCE: u64 = 0;

/// travel time is reported in minutes while speed is given per hour.
pub const MINUTES_PER_HOUR: f64 = 60.0;
