use trackside_bridge::MessageFromBackend;

/// Handles a team catalog request (see
/// [`trackside_bridge::MessageToBackend::TeamCatalogRequest`]): fetches the
/// metric and athlete lists that back the report form selectors.
pub async fn handle_catalog_request(context: super::AppContextHandle, team_id: String) {
    let api = {
        let state = context.state.read().await;
        state.api.clone()
    };

    let (metrics, athletes) = tokio::join!(api.team_metrics(&team_id), api.team_athletes(&team_id));

    match (metrics, athletes) {
        (Ok(metrics), Ok(athletes)) => {
            context
                .send(MessageFromBackend::TeamCatalogResponse { metrics, athletes })
                .await;
        }
        (metrics, athletes) => {
            // selectors keep their previous options until the next change
            if let Err(error) = metrics {
                log::error!("Failed to fetch metrics for team {team_id}: {error}");
            }
            if let Err(error) = athletes {
                log::error!("Failed to fetch athletes for team {team_id}: {error}");
            }
        }
    }
}
