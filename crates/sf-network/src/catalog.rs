//! Built-in catalog: five integrated steel plants in eastern India, their
//! raw-material sources, and their export ports.

use crate::{LocationKind, PlantConfig, RouteConfig};

use LocationKind::{Mine, Port};

fn route(name: &str, kind: LocationKind, km: f64) -> RouteConfig {
    RouteConfig::new(name, kind, km)
}

/// The five plants used when the configuration does not supply `[[plants]]`.
pub fn default_plants() -> Vec<PlantConfig> {
    vec![
        PlantConfig {
            id:            "P001".into(),
            name:          "Bhilai Steel Plant".into(),
            capacity_mtpa: 4.0,
            past_export:   3.4,
            coal_sources: vec![
                route("Dalli Rajhara Mine", Mine, 35.0),
                route("Haldia Port", Port, 650.0),
                route("Visakhapatnam Port", Port, 560.0),
            ],
            limestone_sources: vec![
                route("Bhilai Limestone Mine", Mine, 25.0),
                route("Paradip Port", Port, 500.0),
            ],
            export_ports: vec![
                route("Haldia Port", Port, 650.0),
                route("Visakhapatnam Port", Port, 560.0),
            ],
        },
        PlantConfig {
            id:            "P002".into(),
            name:          "Durgapur Steel Plant".into(),
            capacity_mtpa: 2.0,
            past_export:   1.6,
            coal_sources: vec![
                route("Raniganj Coalfields", Mine, 40.0),
                route("Haldia Port", Port, 160.0),
                route("Visakhapatnam Port", Port, 700.0),
            ],
            limestone_sources: vec![
                route("Chotonagpur Limestone", Mine, 60.0),
                route("Paradip Port", Port, 400.0),
            ],
            export_ports: vec![
                route("Kolkata Port", Port, 160.0),
                route("Haldia Port", Port, 180.0),
            ],
        },
        PlantConfig {
            id:            "P003".into(),
            name:          "Rourkela Steel Plant".into(),
            capacity_mtpa: 2.8,
            past_export:   2.7,
            coal_sources: vec![
                route("Chiria Coal Mine", Mine, 45.0),
                route("Paradip Port", Port, 330.0),
                route("Visakhapatnam Port", Port, 600.0),
            ],
            limestone_sources: vec![
                route("Rourkela Limestone Mine", Mine, 30.0),
                route("Haldia Port", Port, 350.0),
            ],
            export_ports: vec![
                route("Paradip Port", Port, 330.0),
                route("Visakhapatnam Port", Port, 600.0),
            ],
        },
        PlantConfig {
            id:            "P004".into(),
            name:          "Bokaro Steel Plant".into(),
            capacity_mtpa: 3.0,
            past_export:   2.9,
            coal_sources: vec![
                route("Jharia Coalfields", Mine, 35.0),
                route("Haldia Port", Port, 300.0),
                route("Paradip Port", Port, 550.0),
            ],
            limestone_sources: vec![
                route("Bokaro Limestone Mine", Mine, 25.0),
                route("Visakhapatnam Port", Port, 500.0),
            ],
            export_ports: vec![
                route("Haldia Port", Port, 300.0),
                route("Paradip Port", Port, 550.0),
            ],
        },
        PlantConfig {
            id:            "P005".into(),
            name:          "IISCO Steel Plant".into(),
            capacity_mtpa: 1.8,
            past_export:   1.6,
            coal_sources: vec![
                route("Raniganj Coalfields", Mine, 30.0),
                route("Haldia Port", Port, 180.0),
                route("Visakhapatnam Port", Port, 600.0),
            ],
            limestone_sources: vec![
                route("Burnpur Limestone Mine", Mine, 20.0),
                route("Paradip Port", Port, 400.0),
            ],
            export_ports: vec![
                route("Haldia Port", Port, 180.0),
                route("Visakhapatnam Port", Port, 600.0),
            ],
        },
    ]
}
