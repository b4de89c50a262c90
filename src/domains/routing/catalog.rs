use super::types::{ImageSize, Poi};
use crate::common::{DomainError, DomainResult};
use std::collections::HashMap;

/// The active point set, in declaration order.
#[derive(Debug, Clone, Default)]
pub struct PoiCatalog {
    points: Vec<Poi>,
    by_name: HashMap<String, usize>,
}

impl PoiCatalog {
    /// Names must be unique and every point must lie inside `image`.
    pub fn new(points: Vec<Poi>, image: ImageSize) -> DomainResult<Self> {
        let mut by_name = HashMap::with_capacity(points.len());
        for (index, poi) in points.iter().enumerate() {
            if !image.contains(&poi.position()) {
                return Err(DomainError::PoiOutOfBounds {
                    name: poi.name.clone(),
                    x: poi.x,
                    y: poi.y,
                });
            }
            if by_name.insert(poi.name.clone(), index).is_some() {
                return Err(DomainError::DuplicatePoi {
                    name: poi.name.clone(),
                });
            }
        }
        Ok(Self { points, by_name })
    }

    pub fn get(&self, name: &str) -> Option<&Poi> {
        self.by_name.get(name).map(|&i| &self.points[i])
    }

    pub fn require(&self, name: &str) -> DomainResult<&Poi> {
        self.get(name).ok_or_else(|| DomainError::UnknownPoi {
            name: name.to_string(),
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Poi> {
        self.points.iter()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Case-insensitive substring match on the name. An empty query matches
    /// every point.
    pub fn search(&self, query: &str) -> Vec<&Poi> {
        let needle = query.to_lowercase();
        self.points
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&needle))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::routing::types::PoiCategory;

    fn image() -> ImageSize {
        ImageSize::new(1000.0, 1000.0)
    }

    fn sample() -> PoiCatalog {
        PoiCatalog::new(
            vec![
                Poi::new("Entrance", 200.0, 100.0, PoiCategory::Entry),
                Poi::new("Room A", 300.0, 400.0, PoiCategory::Room),
                Poi::new("Room B", 700.0, 700.0, PoiCategory::Room),
                Poi::new("Restroom", 400.0, 600.0, PoiCategory::Restroom),
            ],
            image(),
        )
        .unwrap()
    }

    #[test]
    fn test_lookup_by_name() {
        let catalog = sample();
        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog.get("Room B").map(|p| p.x), Some(700.0));
        assert!(catalog.get("Room C").is_none());
        assert!(matches!(
            catalog.require("Room C"),
            Err(DomainError::UnknownPoi { .. })
        ));
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let catalog = sample();
        let names: Vec<&str> = catalog.search("ROOM").iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Room A", "Room B", "Restroom"]);
        assert_eq!(catalog.search("").len(), 4);
        assert!(catalog.search("kitchen").is_empty());
    }

    #[test]
    fn test_duplicate_names_are_rejected() {
        let result = PoiCatalog::new(
            vec![
                Poi::new("Lab", 10.0, 10.0, PoiCategory::Lab),
                Poi::new("Lab", 20.0, 20.0, PoiCategory::Lab),
            ],
            image(),
        );
        assert!(matches!(result, Err(DomainError::DuplicatePoi { name }) if name == "Lab"));
    }

    #[test]
    fn test_points_outside_image_are_rejected() {
        let result = PoiCatalog::new(vec![Poi::new("Roof", 10.0, 1000.5, PoiCategory::Other)], image());
        assert!(matches!(result, Err(DomainError::PoiOutOfBounds { .. })));
    }
}
