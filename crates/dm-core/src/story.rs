//! Branching story content: nodes, choices, and their effects.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::error::{ScenarioError, ScenarioResult};
use crate::item::ItemId;

/// Identifier of a [`StoryNode`].
pub type NodeId = u32;

/// Stat deltas and an optional item grant applied when a choice is taken.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Effect {
    /// Signed change to health.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health: Option<i32>,
    /// Signed change to sanity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sanity: Option<i32>,
    /// Item granted to the player.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item: Option<ItemId>,
}

impl Effect {
    /// An effect that changes nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the health delta.
    pub fn with_health(mut self, delta: i32) -> Self {
        self.health = Some(delta);
        self
    }

    /// Set the sanity delta.
    pub fn with_sanity(mut self, delta: i32) -> Self {
        self.sanity = Some(delta);
        self
    }

    /// Set the granted item.
    pub fn with_item(mut self, item: impl Into<ItemId>) -> Self {
        self.item = Some(item.into());
        self
    }
}

/// A player-selectable transition out of a [`StoryNode`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    /// Text shown to the player.
    pub text: String,
    /// Destination node.
    pub next_id: NodeId,
    /// Item that must be held for the choice to be taken.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requirement: Option<ItemId>,
    /// Effect applied when the choice is taken.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effect: Option<Effect>,
}

impl Choice {
    /// Create an ungated choice without effects.
    pub fn new(text: impl Into<String>, next_id: NodeId) -> Self {
        Self {
            text: text.into(),
            next_id,
            requirement: None,
            effect: None,
        }
    }

    /// Gate the choice on holding an item.
    pub fn with_requirement(mut self, item: impl Into<ItemId>) -> Self {
        self.requirement = Some(item.into());
        self
    }

    /// Attach an effect.
    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effect = Some(effect);
        self
    }
}

/// One unit of narrative text plus its outgoing choices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryNode {
    /// Unique node id.
    pub id: NodeId,
    /// Narrative text.
    pub text: String,
    /// Outgoing choices, in display order.
    #[serde(default)]
    pub choices: Vec<Choice>,
    /// Entering this node kills the player.
    #[serde(default)]
    pub is_dead_end: bool,
    /// Entering this node wins the game.
    #[serde(default)]
    pub is_win: bool,
    /// A jump scare follows once the text is fully shown.
    #[serde(default)]
    pub jump_scare: bool,
}

impl StoryNode {
    /// Create a plain node.
    pub fn new(id: NodeId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            choices: Vec::new(),
            is_dead_end: false,
            is_win: false,
            jump_scare: false,
        }
    }

    /// Add a choice.
    pub fn with_choice(mut self, choice: Choice) -> Self {
        self.choices.push(choice);
        self
    }

    /// Mark the node as a dead end.
    pub fn dead_end(mut self) -> Self {
        self.is_dead_end = true;
        self
    }

    /// Mark the node as a win.
    pub fn win(mut self) -> Self {
        self.is_win = true;
        self
    }

    /// Mark the node as followed by a jump scare.
    pub fn with_jump_scare(mut self) -> Self {
        self.jump_scare = true;
        self
    }

    /// Whether entering this node ends the game.
    pub fn is_terminal(&self) -> bool {
        self.is_dead_end || self.is_win
    }
}

/// Serialized form of a [`StoryGraph`].
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoryGraphDef {
    start: NodeId,
    nodes: Vec<StoryNode>,
}

/// An id-indexed, validated story graph.
///
/// Every choice's `next_id` is guaranteed to resolve to a node in the graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "StoryGraphDef", into = "StoryGraphDef")]
pub struct StoryGraph {
    start: NodeId,
    nodes: HashMap<NodeId, StoryNode>,
}

impl StoryGraph {
    /// Build a graph, checking id uniqueness and reference integrity.
    pub fn new(start: NodeId, nodes: Vec<StoryNode>) -> ScenarioResult<Self> {
        let mut by_id = HashMap::with_capacity(nodes.len());
        for node in nodes {
            let id = node.id;
            if by_id.insert(id, node).is_some() {
                return Err(ScenarioError::DuplicateNode(id));
            }
        }

        if !by_id.contains_key(&start) {
            return Err(ScenarioError::MissingStartNode(start));
        }

        // Sorted so the reported error is stable across runs.
        let ordered: BTreeMap<_, _> = by_id.iter().collect();
        for (id, node) in ordered {
            if let Some(choice) = node.choices.iter().find(|c| !by_id.contains_key(&c.next_id)) {
                return Err(ScenarioError::DanglingChoice {
                    node: *id,
                    choice: choice.text.clone(),
                    next: choice.next_id,
                });
            }
        }

        Ok(Self {
            start,
            nodes: by_id,
        })
    }

    /// The node a fresh game starts at.
    pub fn start(&self) -> NodeId {
        self.start
    }

    /// Look up a node by id.
    pub fn node(&self, id: NodeId) -> Option<&StoryNode> {
        self.nodes.get(&id)
    }

    /// The start node.
    pub fn start_node(&self) -> &StoryNode {
        // Validated at construction.
        &self.nodes[&self.start]
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the graph has no nodes. Always false for a validated graph.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl TryFrom<StoryGraphDef> for StoryGraph {
    type Error = ScenarioError;

    fn try_from(def: StoryGraphDef) -> ScenarioResult<Self> {
        Self::new(def.start, def.nodes)
    }
}

impl From<StoryGraph> for StoryGraphDef {
    fn from(graph: StoryGraph) -> Self {
        let mut nodes: Vec<_> = graph.nodes.into_values().collect();
        nodes.sort_by_key(|n| n.id);
        Self {
            start: graph.start,
            nodes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_nodes() -> Vec<StoryNode> {
        vec![
            StoryNode::new(0, "Start").with_choice(Choice::new("Go", 1)),
            StoryNode::new(1, "End").win(),
        ]
    }

    #[test]
    fn builds_indexed_graph() {
        let graph = StoryGraph::new(0, two_nodes()).unwrap();
        assert_eq!(graph.len(), 2);
        assert_eq!(graph.start_node().text, "Start");
        assert!(graph.node(1).unwrap().is_win);
        assert!(graph.node(7).is_none());
    }

    #[test]
    fn rejects_duplicate_ids() {
        let mut nodes = two_nodes();
        nodes.push(StoryNode::new(1, "Again"));
        let err = StoryGraph::new(0, nodes).unwrap_err();
        assert!(matches!(err, ScenarioError::DuplicateNode(1)));
    }

    #[test]
    fn rejects_missing_start() {
        let err = StoryGraph::new(9, two_nodes()).unwrap_err();
        assert!(matches!(err, ScenarioError::MissingStartNode(9)));
    }

    #[test]
    fn rejects_dangling_choice() {
        let nodes = vec![StoryNode::new(0, "Start").with_choice(Choice::new("Nowhere", 3))];
        let err = StoryGraph::new(0, nodes).unwrap_err();
        match err {
            ScenarioError::DanglingChoice { node, choice, next } => {
                assert_eq!(node, 0);
                assert_eq!(choice, "Nowhere");
                assert_eq!(next, 3);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn choice_builder() {
        let choice = Choice::new("Open the cellar", 4)
            .with_requirement("key")
            .with_effect(Effect::new().with_sanity(-10).with_item("lamp"));

        assert_eq!(choice.requirement, Some(ItemId::from("key")));
        let effect = choice.effect.unwrap();
        assert_eq!(effect.sanity, Some(-10));
        assert_eq!(effect.health, None);
        assert_eq!(effect.item, Some(ItemId::from("lamp")));
    }

    #[test]
    fn json_is_validated() {
        let json = r#"{"start": 0, "nodes": [
            {"id": 0, "text": "Hall", "choices": [{"text": "On", "next_id": 5}]}
        ]}"#;
        let result: Result<StoryGraph, _> = serde_json::from_str(json);
        assert!(result.is_err());

        let json = r#"{"start": 0, "nodes": [
            {"id": 0, "text": "Hall", "choices": [{"text": "On", "next_id": 1,
              "requirement": "key", "effect": {"health": -5}}]},
            {"id": 1, "text": "Out", "is_win": true}
        ]}"#;
        let graph: StoryGraph = serde_json::from_str(json).unwrap();
        let choice = &graph.start_node().choices[0];
        assert_eq!(choice.requirement, Some(ItemId::from("key")));
        assert_eq!(choice.effect.as_ref().unwrap().health, Some(-5));
        assert!(graph.node(1).unwrap().is_terminal());
    }
}
