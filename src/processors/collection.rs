use crate::models::WaypointRecord;
use std::collections::BTreeMap;

/// Waypoints in source order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WaypointCollection {
    records: Vec<WaypointRecord>,
}

impl WaypointCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn aggregate<I>(records: I) -> Self
    where
        I: IntoIterator<Item = WaypointRecord>,
    {
        Self {
            records: records.into_iter().collect(),
        }
    }

    pub fn push(&mut self, record: WaypointRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[WaypointRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<WaypointRecord> {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WaypointRecord> {
        self.records.iter()
    }

    /// Group by exact state string; keys sorted, source order kept within each group
    pub fn partition_by_state(&self) -> BTreeMap<String, WaypointCollection> {
        let mut partitions: BTreeMap<String, WaypointCollection> = BTreeMap::new();
        for record in &self.records {
            partitions
                .entry(record.state.clone())
                .or_default()
                .push(record.clone());
        }
        partitions
    }
}

impl FromIterator<WaypointRecord> for WaypointCollection {
    fn from_iter<T: IntoIterator<Item = WaypointRecord>>(iter: T) -> Self {
        Self::aggregate(iter)
    }
}

impl<'a> IntoIterator for &'a WaypointCollection {
    type Item = &'a WaypointRecord;
    type IntoIter = std::slice::Iter<'a, WaypointRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn waypoint(name: &str, state: &str) -> WaypointRecord {
        WaypointRecord::new(
            name.to_string(),
            state.to_string(),
            name[..3].to_string(),
            "204126S".to_string(),
            "1393017E".to_string(),
        )
    }

    #[test]
    fn test_partition_preserves_order_within_state() {
        let collection: WaypointCollection = vec![
            waypoint("MOUNT ISA", "QLD"),
            waypoint("ALBURY", "NSW"),
            waypoint("BOWEN", "QLD"),
            waypoint("BATHURST", "NSW"),
            waypoint("CAIRNS", "QLD"),
        ]
        .into_iter()
        .collect();

        let partitions = collection.partition_by_state();

        let keys: Vec<_> = partitions.keys().cloned().collect();
        assert_eq!(keys, vec!["NSW".to_string(), "QLD".to_string()]);

        let qld: Vec<_> = partitions["QLD"].iter().map(|r| r.name.as_str()).collect();
        assert_eq!(qld, vec!["MOUNT ISA", "BOWEN", "CAIRNS"]);

        let nsw: Vec<_> = partitions["NSW"].iter().map(|r| r.name.as_str()).collect();
        assert_eq!(nsw, vec!["ALBURY", "BATHURST"]);
    }

    #[test]
    fn test_partition_conserves_record_count() {
        let collection: WaypointCollection = vec![
            waypoint("MOUNT ISA", "QLD"),
            waypoint("ALBURY", "NSW"),
            waypoint("DARWIN", "NT"),
            waypoint("BOWEN", "QLD"),
        ]
        .into_iter()
        .collect();

        let partitions = collection.partition_by_state();
        let total: usize = partitions.values().map(|p| p.len()).sum();

        assert_eq!(total, collection.len());
        for (state, partition) in &partitions {
            assert!(partition.iter().all(|r| &r.state == state));
        }
    }

    #[test]
    fn test_state_keys_are_exact() {
        let collection: WaypointCollection = vec![waypoint("MOUNT ISA", "QLD"), waypoint("BOWEN", "qld")]
            .into_iter()
            .collect();

        assert_eq!(collection.partition_by_state().len(), 2);
    }

    #[test]
    fn test_empty_collection() {
        let collection = WaypointCollection::new();
        assert!(collection.is_empty());
        assert!(collection.partition_by_state().is_empty());
    }
}
