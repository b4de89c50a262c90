use super::floor_plan::FloorPlanDocument;
use crate::common::DomainResult;

/// Port the routing domain depends on for static floor-plan configuration.
/// Adapters provide filesystem or embedded sources.
pub trait FloorPlanSource: Send + Sync {
    /// Raw document text, for callers that want to inspect it.
    fn load_raw(&self, name: &str) -> DomainResult<String>;

    fn load_document(&self, name: &str) -> DomainResult<FloorPlanDocument> {
        let raw = self.load_raw(name)?;
        Ok(serde_json::from_str(&raw)?)
    }
}
