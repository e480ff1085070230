//! Running-cost calculator. Battery capacity and range are entered by admins
//! as free-text spec rows ("1.7 kWh", "100 km"); this module parses them back
//! into numbers and compares charging cost against an equivalent petrol
//! two-wheeler.

use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;
use uuid::Uuid;

use crate::{
    db::entities::{vehicle, vehicle_spec},
    error::AppError,
    services::{crud_service::CrudService, vehicle_service::VehicleService},
};

/// Grid tariff, rupees per kWh.
pub const ELECTRICITY_RATE: f64 = 5.0;
/// Pump price, rupees per litre.
pub const PETROL_PRICE: f64 = 100.0;
/// Mileage assumed for the petrol comparison, km per litre.
pub const PETROL_MILEAGE_KM_PER_L: f64 = 50.0;

pub const MIN_DAILY_KM: f64 = 1.0;
pub const MAX_DAILY_KM: f64 = 500.0;

const DAYS_PER_MONTH: f64 = 30.0;
const DAYS_PER_YEAR: f64 = 365.0;

/// A vehicle whose battery and range specs parsed, with the derived
/// consumption figure the frontend slider needs.
#[derive(Clone, Debug, Serialize)]
pub struct CalculatorVehicle {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub battery_kwh: f64,
    pub range_km: f64,
    pub energy_per_km: f64,
}

#[derive(Clone, Copy, Debug, Serialize)]
pub struct CostBreakdown {
    pub electric_cost: f64,
    pub petrol_cost: f64,
    pub savings: f64,
}

impl CostBreakdown {
    fn scaled(&self, factor: f64) -> Self {
        Self {
            electric_cost: self.electric_cost * factor,
            petrol_cost: self.petrol_cost * factor,
            savings: self.savings * factor,
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct CostEstimate {
    pub vehicle_id: Uuid,
    pub daily_km: f64,
    pub per_day: CostBreakdown,
    pub per_month: CostBreakdown,
    pub per_year: CostBreakdown,
}

#[derive(Clone)]
pub struct CalculatorService {
    vehicles: VehicleService,
}

impl CalculatorService {
    pub fn new(vehicles: VehicleService) -> Self {
        Self { vehicles }
    }

    /// Active vehicles usable in the calculator. Vehicles whose specs do not
    /// parse are silently skipped.
    pub async fn list_vehicles(&self) -> Result<Vec<CalculatorVehicle>, AppError> {
        let active = self.vehicles.list_active(None).await?;
        let mut out = Vec::with_capacity(active.len());
        for vehicle in active {
            let specs = self.vehicles.specs_for(&vehicle.id).await?;
            if let Some(parsed) = calculator_vehicle(&vehicle, &specs) {
                out.push(parsed);
            }
        }
        Ok(out)
    }

    pub async fn estimate(&self, vehicle_id: &Uuid, daily_km: f64) -> Result<CostEstimate, AppError> {
        if !(MIN_DAILY_KM..=MAX_DAILY_KM).contains(&daily_km) {
            return Err(AppError::bad_request(format!(
                "daily_km must be between {MIN_DAILY_KM} and {MAX_DAILY_KM}"
            )));
        }

        let vehicle = CrudService::find_by_id(&self.vehicles, *vehicle_id).await?;
        let specs = self.vehicles.specs_for(&vehicle.id).await?;
        let parsed = calculator_vehicle(&vehicle, &specs).ok_or_else(|| {
            AppError::bad_request("Vehicle does not carry usable battery and range specs")
        })?;

        let per_day = CostBreakdown {
            electric_cost: daily_km * parsed.energy_per_km * ELECTRICITY_RATE,
            petrol_cost: daily_km / PETROL_MILEAGE_KM_PER_L * PETROL_PRICE,
            savings: 0.0,
        };
        let per_day = CostBreakdown {
            savings: per_day.petrol_cost - per_day.electric_cost,
            ..per_day
        };

        Ok(CostEstimate {
            vehicle_id: *vehicle_id,
            daily_km,
            per_day,
            per_month: per_day.scaled(DAYS_PER_MONTH),
            per_year: per_day.scaled(DAYS_PER_YEAR),
        })
    }
}

fn calculator_vehicle(
    vehicle: &vehicle::Model,
    specs: &[vehicle_spec::Model],
) -> Option<CalculatorVehicle> {
    let battery_kwh = find_spec_number(specs, "battery")?;
    let range_km = find_spec_number(specs, "range")?;
    if battery_kwh <= 0.0 || range_km <= 0.0 {
        return None;
    }
    Some(CalculatorVehicle {
        id: vehicle.id,
        name: vehicle.name.clone(),
        slug: vehicle.slug.clone(),
        battery_kwh,
        range_km,
        energy_per_km: battery_kwh / range_km,
    })
}

fn find_spec_number(specs: &[vehicle_spec::Model], label_fragment: &str) -> Option<f64> {
    specs
        .iter()
        .find(|spec| spec.label.to_lowercase().contains(label_fragment))
        .and_then(|spec| parse_leading_number(&spec.value))
}

/// First decimal number in a free-text spec value ("1.7 kWh" → 1.7).
fn parse_leading_number(value: &str) -> Option<f64> {
    static NUMBER: OnceLock<Regex> = OnceLock::new();
    let number = NUMBER.get_or_init(|| {
        Regex::new(r"\d+(?:\.\d+)?").unwrap_or_else(|_| unreachable!("valid literal pattern"))
    });
    number.find(value)?.as_str().parse().ok()
}
