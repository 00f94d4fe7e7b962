use crate::config::AppConfig;
use crate::database::StoreProbe;
use crate::models::DiagnosticsResponse;
use std::sync::Arc;

/// Number of collection names echoed back by the diagnostic report.
const MAX_LISTED_COLLECTIONS: usize = 10;
const MAX_ERROR_CHARS: usize = 50;

/// Builds the health report for `GET /test`. Never fails: every problem is
/// folded into a status string.
pub struct DiagnosticsService {
    probe: Arc<dyn StoreProbe>,
    database_url_set: bool,
    database_name_set: bool,
}

impl DiagnosticsService {
    pub fn new(probe: Arc<dyn StoreProbe>, config: &AppConfig) -> Self {
        Self {
            probe,
            database_url_set: config.database_url.is_some(),
            database_name_set: config.database_name.is_some(),
        }
    }

    pub async fn report(&self) -> DiagnosticsResponse {
        let mut report = DiagnosticsResponse {
            backend: "✅ Running".to_string(),
            database: "❌ Not Available".to_string(),
            database_url: set_marker(self.database_url_set),
            database_name: set_marker(self.database_name_set),
            connection_status: "Not Connected".to_string(),
            collections: Vec::new(),
        };

        if !self.probe.is_connected() {
            report.database = "⚠️  Available but not initialized".to_string();
            return report;
        }

        report.database = "✅ Available".to_string();
        report.connection_status = "Connected".to_string();

        match self.probe.collection_names().await {
            Ok(names) => {
                report.collections = names.into_iter().take(MAX_LISTED_COLLECTIONS).collect();
                report.database = "✅ Connected & Working".to_string();
            }
            Err(e) => {
                let detail: String = e.cause().chars().take(MAX_ERROR_CHARS).collect();
                report.database = format!("⚠️  Connected but Error: {}", detail);
            }
        }

        report
    }
}

fn set_marker(is_set: bool) -> String {
    if is_set { "✅ Set" } else { "❌ Not Set" }.to_string()
}
