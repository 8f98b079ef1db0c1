//! Unit tests for sf-network.

use crate::{LocationKind, NetworkBuilder, PlantConfig, RouteConfig};

fn tiny_plant(name: &str, code: &str) -> PlantConfig {
    PlantConfig {
        id:                code.into(),
        name:              name.into(),
        capacity_mtpa:     1.0,
        past_export:       1.0,
        coal_sources:      vec![RouteConfig::new("North Mine", LocationKind::Mine, 50.0)],
        limestone_sources: vec![RouteConfig::new("East Port", LocationKind::Port, 200.0)],
        export_ports:      vec![RouteConfig::new("East Port", LocationKind::Port, 200.0)],
    }
}

#[cfg(test)]
mod catalog {
    use sf_core::{Material, PlantId};

    use crate::{LocationKind, Network};

    #[test]
    fn default_catalog_shape() {
        let net = Network::default_catalog().unwrap();
        assert_eq!(net.plant_count(), 5);
        let ports: Vec<&str> = net.ports().into_iter().map(|p| net.name(p)).collect();
        assert_eq!(ports, ["Haldia Port", "Kolkata Port", "Paradip Port", "Visakhapatnam Port"]);
    }

    #[test]
    fn shared_locations_are_interned_once() {
        let net = Network::default_catalog().unwrap();
        let haldia = net.lookup("Haldia Port").unwrap();
        let bhilai = net.plant(PlantId(0)).unwrap();
        assert!(bhilai.coal_sources.iter().any(|r| r.location == haldia));
        assert!(bhilai.export_ports.iter().any(|r| r.location == haldia));
        assert_eq!(net.kind(haldia), Some(LocationKind::Port));
    }

    #[test]
    fn routes_by_material() {
        let net = Network::default_catalog().unwrap();
        let plant = net.plant(net.plant_by_name("Bokaro Steel Plant").unwrap()).unwrap();
        assert_eq!(plant.routes(Material::Coal).len(), 3);
        assert_eq!(plant.routes(Material::Limestone).len(), 2);
        assert!(plant.routes(Material::Steel).iter().all(|r| net.is_port(r.location)));
    }

    #[test]
    fn plant_locations_are_plants() {
        let net = Network::default_catalog().unwrap();
        for p in net.plants() {
            assert_eq!(net.kind(p.location), Some(LocationKind::Plant));
            assert_eq!(net.name(p.location), p.name);
        }
    }
}

#[cfg(test)]
mod builder {
    use super::*;
    use crate::NetworkError;

    #[test]
    fn builds_custom_network() {
        let net = NetworkBuilder::from_configs(&[tiny_plant("Alpha Works", "A1")])
            .unwrap()
            .build();
        assert_eq!(net.location_count(), 3); // plant, mine, port
        assert_eq!(net.ports().len(), 1);
    }

    #[test]
    fn duplicate_plant_rejected() {
        let result = NetworkBuilder::from_configs(&[
            tiny_plant("Alpha Works", "A1"),
            tiny_plant("Alpha Works", "A2"),
        ]);
        assert!(matches!(result, Err(NetworkError::DuplicatePlant(_))));
    }

    #[test]
    fn kind_conflict_rejected() {
        let mut b = NetworkBuilder::new();
        b.add_location("Twin", LocationKind::Mine).unwrap();
        assert!(matches!(
            b.add_location("Twin", LocationKind::Port),
            Err(NetworkError::KindConflict { .. })
        ));
    }

    #[test]
    fn plant_without_export_port_rejected() {
        let mut cfg = tiny_plant("Alpha Works", "A1");
        cfg.export_ports.clear();
        assert!(matches!(
            NetworkBuilder::from_configs(&[cfg]),
            Err(NetworkError::NoRoutes { what: "export ports", .. })
        ));
    }

    #[test]
    fn source_weights() {
        assert_eq!(LocationKind::Mine.source_weight(), 0.7);
        assert_eq!(LocationKind::Plant.source_weight(), 0.7);
        assert_eq!(LocationKind::Port.source_weight(), 0.3);
    }
}
