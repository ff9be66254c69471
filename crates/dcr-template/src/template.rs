//! The persisted template form of a DCR graph.

use serde::{Deserialize, Serialize};

use dcr_core::{DcrGraph, Event, EventSet, GraphError, Marking, RelationKind, RelationMap};

/// Errors from template building and the `.dcr` container format.
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error("event {0} appears in the template without a label mapping")]
    MissingLabel(Event),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("deserialization error: {0}")]
    Deserialization(String),

    #[error("invalid DCR magic bytes")]
    InvalidMagic,

    #[error("unsupported DCR file version {major}.{minor}")]
    UnsupportedVersion { major: u8, minor: u8 },

    #[error("DCR file too short: need at least {expected} bytes, got {actual}")]
    TooShort { expected: usize, actual: usize },

    #[error("integrity check failed: expected {expected}, got {actual}")]
    IntegrityFailed { expected: String, actual: String },
}

/// Dictionary form of a graph, using the historical template keys.
///
/// Relation mappings in a template may reference super-activities; they are
/// resolved when the template is built into a graph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    pub events: EventSet,
    pub labels: EventSet,
    #[serde(rename = "labelMapping")]
    pub label_mapping: std::collections::HashMap<Event, String>,
    pub marking: Marking,
    #[serde(rename = "conditionsFor")]
    pub conditions_for: RelationMap,
    #[serde(rename = "responseTo")]
    pub response_to: RelationMap,
    #[serde(rename = "includesTo")]
    pub includes_to: RelationMap,
    #[serde(rename = "excludesTo")]
    pub excludes_to: RelationMap,
    #[serde(rename = "milestonesFor")]
    pub milestones_for: RelationMap,
    #[serde(rename = "noResponseTo")]
    pub no_response_to: RelationMap,
    #[serde(rename = "superActivities")]
    pub super_activities: RelationMap,
}

impl Template {
    /// Snapshot a graph into its template form. Stored relations are
    /// already resolved, so the snapshot contains no super-activity
    /// references outside the `superActivities` map itself.
    pub fn from_graph(graph: &DcrGraph) -> Self {
        Self {
            events: graph.events().clone(),
            labels: graph.labels().clone(),
            label_mapping: graph
                .events()
                .iter()
                .filter_map(|e| graph.label_of(e).map(|l| (e.clone(), l.to_string())))
                .collect(),
            marking: graph.marking().clone(),
            conditions_for: graph.conditions().clone(),
            response_to: graph.responses().clone(),
            includes_to: graph.includes().clone(),
            excludes_to: graph.excludes().clone(),
            milestones_for: graph.milestones().clone(),
            no_response_to: graph.no_responses().clone(),
            super_activities: graph.super_activities().clone(),
        }
    }

    /// Rebuild the graph this template was snapshotted from.
    ///
    /// Relation mappings are restored verbatim (validated, but not
    /// re-resolved): stored maps are already in their final form, and a map
    /// that keys on a super-activity identifier — legal when the relation
    /// was assigned before the super-activity map — must survive a
    /// persistence round trip unchanged. Re-resolving here would strip the
    /// group label's own relations and silently change the reloaded
    /// graph's semantics.
    pub fn build(self) -> Result<DcrGraph, TemplateError> {
        let mut graph = self.build_universe()?;
        graph.set_super_activities(self.super_activities)?;
        graph.restore_relation(RelationKind::Condition, self.conditions_for)?;
        graph.restore_relation(RelationKind::Response, self.response_to)?;
        graph.restore_relation(RelationKind::Include, self.includes_to)?;
        graph.restore_relation(RelationKind::Exclude, self.excludes_to)?;
        graph.restore_relation(RelationKind::Milestone, self.milestones_for)?;
        graph.restore_relation(RelationKind::NoResponse, self.no_response_to)?;
        *graph.marking_mut() = self.marking;
        Ok(graph)
    }

    /// Build a graph from a hand-written template whose relation mappings
    /// may still reference super-activities.
    ///
    /// Each mapping goes through the normal assignment path, so nesting is
    /// resolved at this construction boundary. For templates produced by
    /// [`Template::from_graph`], prefer [`Template::build`], which restores
    /// the stored maps exactly.
    pub fn build_resolved(self) -> Result<DcrGraph, TemplateError> {
        let mut graph = self.build_universe()?;
        graph.set_super_activities(self.super_activities)?;
        graph.set_conditions(self.conditions_for)?;
        graph.set_responses(self.response_to)?;
        graph.set_includes(self.includes_to)?;
        graph.set_excludes(self.excludes_to)?;
        graph.set_milestones(self.milestones_for)?;
        graph.set_no_responses(self.no_response_to)?;
        *graph.marking_mut() = self.marking;
        Ok(graph)
    }

    fn build_universe(&self) -> Result<DcrGraph, TemplateError> {
        let mut graph = DcrGraph::new();
        for event in &self.events {
            let label = self
                .label_mapping
                .get(event)
                .ok_or_else(|| TemplateError::MissingLabel(event.clone()))?;
            graph.add_event(event.clone(), label.clone());
        }
        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dcr_core::event::event_set;

    fn sample_graph() -> DcrGraph {
        let mut g = DcrGraph::new();
        for e in ["A", "B", "C", "D", "E", "F"] {
            g.add_event(e, e);
        }
        let mut supers = RelationMap::new();
        supers.insert("A".to_string(), event_set(["B", "E"]));
        g.set_super_activities(supers).unwrap();

        let mut responses = RelationMap::new();
        responses.insert("A".to_string(), event_set(["C"]));
        responses.insert("D".to_string(), event_set(["A", "F"]));
        g.set_responses(responses).unwrap();

        let mut milestones = RelationMap::new();
        milestones.insert("C".to_string(), event_set(["F"]));
        g.set_milestones(milestones).unwrap();
        g
    }

    #[test]
    fn snapshot_and_rebuild_round_trips() {
        let graph = sample_graph();
        let template = Template::from_graph(&graph);
        let rebuilt = template.build().unwrap();
        assert_eq!(rebuilt, graph);
    }

    #[test]
    fn round_trip_preserves_group_keyed_relations() {
        // Conditions assigned before the super-activity map keep the group
        // label as a key; that form must survive persistence exactly.
        let mut g = DcrGraph::new();
        for e in ["S", "M1", "M2", "G"] {
            g.add_event(e, e);
        }
        let mut conditions = RelationMap::new();
        conditions.insert("S".to_string(), event_set(["G"]));
        g.set_conditions(conditions).unwrap();
        let mut supers = RelationMap::new();
        supers.insert("S".to_string(), event_set(["M1", "M2"]));
        g.set_super_activities(supers).unwrap();

        let rebuilt = Template::from_graph(&g).build().unwrap();
        assert_eq!(rebuilt, g);
        assert_eq!(rebuilt.conditions()["S"], event_set(["G"]));
        assert!(!rebuilt.conditions().contains_key("M1"));
    }

    #[test]
    fn raw_template_resolved_by_build_resolved() {
        let snapshot = Template::from_graph(&sample_graph());
        let mut raw = snapshot.clone();
        // Re-introduce the unresolved form.
        raw.response_to.clear();
        raw.response_to
            .insert("A".to_string(), event_set(["C"]));
        raw.response_to
            .insert("D".to_string(), event_set(["A", "F"]));

        let built = raw.build_resolved().unwrap();
        assert_eq!(built.responses(), snapshot.build().unwrap().responses());
    }

    #[test]
    fn missing_label_rejected() {
        let mut template = Template::from_graph(&sample_graph());
        template.label_mapping.remove("B");
        assert!(matches!(
            template.build(),
            Err(TemplateError::MissingLabel(_))
        ));
    }

    #[test]
    fn undeclared_relation_event_rejected() {
        let mut template = Template::from_graph(&sample_graph());
        template
            .excludes_to
            .insert("A".to_string(), event_set(["ghost"]));
        assert!(matches!(template.build(), Err(TemplateError::Graph(_))));
    }

    #[test]
    fn json_uses_historical_keys() {
        let template = Template::from_graph(&sample_graph());
        let json = serde_json::to_string(&template).unwrap();
        assert!(json.contains("conditionsFor"));
        assert!(json.contains("responseTo"));
        assert!(json.contains("milestonesFor"));
        assert!(json.contains("noResponseTo"));
        assert!(json.contains("superActivities"));
    }
}
