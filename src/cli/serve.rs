use crate::{
    api::AppState, config::Settings, error, management::Library, server::start_api_server,
    success,
};

pub async fn serve(settings: &Settings, library: Library) {
    let catalog = library.catalog();
    success!(
        "Catalog ready: {} categories, {} malformed entries",
        catalog.groups.len(),
        catalog.errors.len()
    );

    let state = AppState {
        library,
        allowed_countries: settings.allowed_countries.clone(),
    };

    if let Err(e) = start_api_server(&settings.server_address, state).await {
        error!("Server failed. Err: {}", e);
    }
}
