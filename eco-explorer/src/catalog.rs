//! Startup load of the location and metric catalogs.
//!
//! Both catalogs are fetched concurrently and joined. A failure of one
//! leaves the other usable.

use crate::transport::Transport;
use eco_core::{
    catalog::{CatalogResponse, Location, Metric},
    query::{ApiRequest, Endpoint},
    Catalog, ExplorerError, TransportError,
};
use log::{info, warn};
use serde::de::DeserializeOwned;

/// Result of one catalog load: each side independently loaded or failed.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogLoad {
    pub locations: Result<Vec<Location>, ExplorerError>,
    pub metrics: Result<Vec<Metric>, ExplorerError>,
}

impl CatalogLoad {
    pub fn errors(&self) -> Vec<&ExplorerError> {
        [self.locations.as_ref().err(), self.metrics.as_ref().err()]
            .into_iter()
            .flatten()
            .collect()
    }
}

async fn fetch_catalog<T, R>(transport: &T, catalog: Catalog) -> Result<Vec<R>, ExplorerError>
where
    T: Transport + ?Sized,
    R: DeserializeOwned,
{
    let endpoint = match catalog {
        Catalog::Locations => Endpoint::Locations,
        Catalog::Metrics => Endpoint::Metrics,
    };
    let request = ApiRequest::bare(endpoint);
    let decoded = match transport.get_json(&request).await {
        Ok(payload) => serde_json::from_value::<CatalogResponse<R>>(payload)
            .map_err(TransportError::from),
        Err(e) => Err(e),
    };
    match decoded {
        Ok(response) => {
            info!("loaded {} {}", response.data.len(), catalog);
            Ok(response.data)
        }
        Err(reason) => {
            warn!("{} catalog unavailable: {}", catalog, reason);
            Err(ExplorerError::CatalogLoadFailed { catalog, reason })
        }
    }
}

/// Fetch both catalogs concurrently and wait for both.
pub async fn load_catalogs<T: Transport + ?Sized>(transport: &T) -> CatalogLoad {
    let (locations, metrics) = tokio::join!(
        fetch_catalog::<T, Location>(transport, Catalog::Locations),
        fetch_catalog::<T, Metric>(transport, Catalog::Metrics),
    );
    CatalogLoad { locations, metrics }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::ReplayTransport;
    use eco_core::ErrorKind;
    use serde_json::json;

    #[tokio::test]
    async fn test_both_catalogs_load() {
        let transport = ReplayTransport::new();
        transport
            .push(
                Endpoint::Locations,
                Ok(json!({"data": [{"id": 1, "name": "Irvine", "country": "USA"}]})),
            )
            .push(
                Endpoint::Metrics,
                Ok(json!({"data": [
                    {"id": 1, "name": "temperature", "display_name": "Temperature", "unit": "celsius"},
                    {"id": 2, "name": "precipitation", "display_name": "Precipitation", "unit": "mm"}
                ]})),
            );
        let load = load_catalogs(&transport).await;
        assert_eq!(load.locations.unwrap().len(), 1);
        assert_eq!(load.metrics.unwrap().len(), 2);
        assert_eq!(transport.requests().len(), 2);
    }

    #[tokio::test]
    async fn test_one_failure_leaves_other_catalog() {
        let transport = ReplayTransport::new();
        transport
            .push(Endpoint::Locations, Err(TransportError::Http(500)))
            .push(Endpoint::Metrics, Ok(json!({"data": []})));
        let load = load_catalogs(&transport).await;
        let errors = load.errors();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind(), ErrorKind::CatalogLoadFailed);
        assert!(load.metrics.is_ok());
    }

    #[tokio::test]
    async fn test_malformed_catalog_is_a_load_failure() {
        let transport = ReplayTransport::new();
        transport
            .push(Endpoint::Locations, Ok(json!({"data": [{"id": "one"}]})))
            .push(Endpoint::Metrics, Ok(json!({"data": []})));
        let load = load_catalogs(&transport).await;
        assert!(matches!(
            load.locations,
            Err(ExplorerError::CatalogLoadFailed {
                catalog: Catalog::Locations,
                reason: TransportError::Decode(_)
            })
        ));
    }
}
