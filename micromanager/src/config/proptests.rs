//! Property-based tests for configuration building.

use super::builder::SystemBuilder;
use crate::fs::MockFileSystem;
use proptest::prelude::*;
use serde_json::{Map, Value};
use std::path::Path;

// Unique, ordered names
fn names_strategy(max: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::hash_set("[a-z][a-z0-9_-]{0,11}", 1..max)
        .prop_flat_map(|set| Just(set.into_iter().collect::<Vec<_>>()).prop_shuffle())
}

fn compose_contents(services: &[String]) -> String {
    let mut out = String::from("services:\n");
    for service in services {
        out.push_str(&format!("  \"{service}\": {{}}\n"));
    }
    out
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 500,
        .. ProptestConfig::default()
    })]

    // Systems, projects and services come out in declaration order
    #[test]
    fn build_preserves_declaration_order(
        systems in names_strategy(6),
        projects in names_strategy(6),
        services in names_strategy(8),
        default_index in any::<prop::sample::Index>(),
    ) {
        let fs = MockFileSystem::new().with_file("compose.yml", compose_contents(&services));
        let default_name = default_index.get(&systems).clone();

        let mut systems_map = Map::new();
        for system in &systems {
            let mut projects_map = Map::new();
            for project in &projects {
                projects_map.insert(
                    project.clone(),
                    serde_json::json!({ "compose_file_path": "compose.yml" }),
                );
            }
            let mut attrs = Map::new();
            if *system == default_name {
                attrs.insert("default".to_string(), Value::Bool(true));
            }
            attrs.insert("projects".to_string(), Value::Object(projects_map));
            systems_map.insert(system.clone(), Value::Object(attrs));
        }
        let document = serde_json::json!({ "systems": systems_map });

        let built = SystemBuilder::new(&fs)
            .build(Path::new("config.json"), &document)
            .unwrap();

        prop_assert_eq!(built.keys().cloned().collect::<Vec<_>>(), systems.clone());
        for system in built.values() {
            prop_assert_eq!(system.is_default, system.name == default_name);
            let project_names: Vec<_> = system.projects.iter().map(|p| p.name.clone()).collect();
            prop_assert_eq!(&project_names, &projects);
            for project in &system.projects {
                let service_names: Vec<_> = project.service_names().map(String::from).collect();
                prop_assert_eq!(&service_names, &services);
            }
        }
    }
}
