//! Initial bridge inventory loaded by the `load-bridge-data` command.
//!
//! Loading is idempotent: bridges are matched by name and traffic snapshots
//! are only written for bridges that have none.

use rust_decimal::Decimal;
use tracing::info;

use crate::db::DbPool;
use crate::error::AppResult;
use crate::models::{BridgeRequest, BridgeType, Material, TrafficRequest};

/// One bridge of the initial inventory with its traffic counts.
#[derive(Debug, Clone)]
pub struct SeedBridge {
    pub bridge: BridgeRequest,
    pub traffic: TrafficRequest,
}

/// What a load run actually wrote.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SeedSummary {
    /// Names of bridges created by this run
    pub bridges_created: Vec<String>,
    /// Number of traffic snapshots created by this run
    pub traffic_created: usize,
}

#[allow(clippy::too_many_arguments)]
fn beam_composite(
    name: &str,
    length: Decimal,
    width: Decimal,
    route: &str,
    gps: &str,
    ratings: [i32; 4],
    heavy: i32,
    small: i32,
) -> SeedBridge {
    let [deck, girders, piers, abutment] = ratings;
    SeedBridge {
        bridge: BridgeRequest {
            name: name.to_string(),
            bridge_type: BridgeType::BeamComposite,
            length,
            width,
            lanes: 3,
            material: Material::SteelConcrete,
            year_built: 2024,
            route: route.to_string(),
            gps_coordinates: gps.to_string(),
            deck_rating: Some(deck),
            girders_rating: Some(girders),
            piers_rating: Some(piers),
            abutment_rating: Some(abutment),
            condition_notes: None,
        },
        traffic: TrafficRequest {
            heavy_vehicles: heavy,
            small_vehicles: small,
        },
    }
}

/// The three bridges of the initial inventory.
pub fn initial_bridges() -> Vec<SeedBridge> {
    vec![
        beam_composite(
            "Bridge 1",
            Decimal::new(46_158, 3),
            Decimal::new(125, 1),
            "CITY-MASVINGO ROAD WITH AN UNDERPASS",
            "X=-1593.793 Y=-1981906.781",
            [5, 5, 1, 2],
            66,
            46,
        ),
        beam_composite(
            "Bridge 2",
            Decimal::new(60_213, 3),
            Decimal::new(125, 1),
            "GLEN NORAH-CHITUNGWIZA",
            "X=-1795.167 Y=-1981782.345",
            [5, 2, 5, 3],
            42,
            52,
        ),
        beam_composite(
            "Bridge 3",
            Decimal::new(46_179, 3),
            Decimal::new(12, 0),
            "CITY-MASVINGO ROAD",
            "X=-1671.849 Y=-1982017.132",
            [5, 4, 4, 5],
            66,
            46,
        ),
    ]
}

/// Load the initial inventory, skipping anything already present.
pub async fn load_initial_data(pool: &DbPool) -> AppResult<SeedSummary> {
    let mut summary = SeedSummary::default();

    for seed in initial_bridges() {
        seed.bridge.validate()?;

        let bridge = match pool.find_bridge_by_name(&seed.bridge.name).await? {
            Some(existing) => existing,
            None => {
                let created = pool.insert_bridge(&seed.bridge).await?;
                info!(bridge_id = %created.id, name = %created.name, "Created bridge");
                summary.bridges_created.push(created.name.clone());
                created
            }
        };

        seed.traffic.validate()?;
        if pool.insert_traffic_if_absent(bridge.id, &seed.traffic).await? {
            summary.traffic_created += 1;
        }
    }

    if summary.bridges_created.is_empty() && summary.traffic_created == 0 {
        info!("Initial bridge data already present");
    }

    Ok(summary)
}
