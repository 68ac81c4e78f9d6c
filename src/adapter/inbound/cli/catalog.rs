//! `fanboard catalog`: list the supported lists.

use serde_json::json;
use tabled::Tabled;

use crate::adapter::inbound::cli::output;
use crate::catalog::Catalog;

#[derive(Tabled)]
struct SpecRow {
    #[tabled(rename = "Sport")]
    sport: String,
    #[tabled(rename = "Kind")]
    kind: String,
    #[tabled(rename = "Endpoint")]
    endpoint: &'static str,
    #[tabled(rename = "Id")]
    id_path: String,
    #[tabled(rename = "Scope")]
    scope: String,
}

pub fn execute(catalog: &Catalog) {
    if output::is_json() {
        let lists: Vec<_> = catalog
            .iter()
            .map(|spec| {
                json!({
                    "sport": spec.sport,
                    "kind": spec.kind,
                    "endpoint": spec.endpoint,
                    "id_path": spec.id_path.to_string(),
                    "scope": spec.scope(),
                })
            })
            .collect();
        output::document(json!({ "command": "catalog", "lists": lists }));
        return;
    }

    output::header("supported lists");

    let rows: Vec<SpecRow> = catalog
        .iter()
        .map(|spec| SpecRow {
            sport: spec.sport.to_string(),
            kind: spec.kind.to_string(),
            endpoint: spec.endpoint,
            id_path: spec.id_path.to_string(),
            scope: spec.scope().to_string(),
        })
        .collect();

    output::table(rows);
    output::summary(&[("lists", catalog.len())]);
}
