//! In-memory retained scene implementing [`PresentationSurface`].
//!
//! Nodes are matched by `.class` or `#id` selectors. Attribute transitions
//! progress only when [`Scene::advance`] is called, which makes the scene
//! usable both headless and from a frame loop.

use crate::traits::{PresentationSurface, SurfaceNode};
use std::{collections::BTreeMap, time::Duration};

/// A numeric attribute moving linearly between two values.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    /// Attribute being animated.
    pub attr: String,
    /// Value when the transition started.
    pub from: f64,
    /// Value when it finishes.
    pub to: f64,
    /// Total length.
    pub duration: Duration,
    elapsed: Duration,
}

impl Transition {
    fn value(&self) -> f64 {
        let progress = self.elapsed.as_secs_f64() / self.duration.as_secs_f64();
        progress.mul_add(self.to - self.from, self.from)
    }

    fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}

/// An element of a [`Scene`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SceneNode {
    id: Option<String>,
    classes: Vec<String>,
    attrs: BTreeMap<String, String>,
    transitions: Vec<Transition>,
}

impl SceneNode {
    /// Creates a node with one class.
    pub fn with_class(class: impl Into<String>) -> Self {
        Self {
            classes: vec![class.into()],
            ..Self::default()
        }
    }

    /// Creates a node with an id.
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    /// Sets an attribute, builder style.
    #[must_use]
    pub fn attr_init(mut self, name: &str, value: &str) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Pending transition of an attribute, if any.
    pub fn transition(&self, name: &str) -> Option<&Transition> {
        self.transitions.iter().find(|t| t.attr == name)
    }

    fn matches(&self, selector: &str) -> bool {
        if let Some(class) = selector.strip_prefix('.') {
            self.classes.iter().any(|c| c == class)
        } else if let Some(id) = selector.strip_prefix('#') {
            self.id.as_deref() == Some(id)
        } else {
            false
        }
    }

    fn advance(&mut self, elapsed: Duration) {
        for transition in &mut self.transitions {
            let total = transition.elapsed + elapsed;
            transition.elapsed = total.min(transition.duration);
            let value = transition.value();
            self.attrs.insert(transition.attr.clone(), value.to_string());
        }
        self.transitions.retain(|t| !t.is_finished());
    }
}

impl SurfaceNode for SceneNode {
    fn attr(&self, name: &str) -> Option<String> {
        self.attrs.get(name).cloned()
    }

    fn set_attr(&mut self, name: &str, value: &str) {
        self.attrs.insert(name.to_string(), value.to_string());
    }

    /// Starts from the current numeric value, or from `target` if the
    /// attribute is unset or not numeric. Replaces any transition already
    /// running on the same attribute.
    fn transition_attr(&mut self, name: &str, target: f64, duration: Duration) {
        self.transitions.retain(|t| t.attr != name);

        if duration.is_zero() {
            self.set_attr(name, &target.to_string());
            return;
        }

        let from = self
            .attrs
            .get(name)
            .and_then(|v| v.parse::<f64>().ok())
            .unwrap_or(target);

        self.transitions.push(Transition {
            attr: name.to_string(),
            from,
            to: target,
            duration,
            elapsed: Duration::ZERO,
        });
    }
}

/// A flat list of nodes searched in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    nodes: Vec<SceneNode>,
}

impl Scene {
    /// Creates an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node.
    pub fn push(&mut self, node: SceneNode) {
        self.nodes.push(node);
    }

    /// First node matching `selector`.
    pub fn node(&self, selector: &str) -> Option<&SceneNode> {
        self.nodes.iter().find(|n| n.matches(selector))
    }

    /// Moves every running transition forward by `elapsed`.
    pub fn advance(&mut self, elapsed: Duration) {
        for node in &mut self.nodes {
            node.advance(elapsed);
        }
    }

    /// Whether no transitions are running.
    pub fn is_settled(&self) -> bool {
        self.nodes.iter().all(|n| n.transitions.is_empty())
    }
}

impl PresentationSurface for Scene {
    type Node = SceneNode;

    fn select(&mut self, selector: &str) -> Option<&mut SceneNode> {
        self.nodes.iter_mut().find(|n| n.matches(selector))
    }
}
