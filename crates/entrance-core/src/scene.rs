//! Render model for the six entrance surfaces.
//!
//! The session mutates this model and the web frontend writes it to inline
//! styles every frame. Nothing here references platform APIs.

use glam::Vec2;

/// One of the two draggable elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }

    #[inline]
    pub fn other(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    #[inline]
    pub fn target(self) -> Target {
        match self {
            Side::Left => Target::Left,
            Side::Right => Target::Right,
        }
    }
}

/// Animatable surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Target {
    Container,
    Left,
    Right,
    Affordance,
    Message,
    Content,
}

impl Target {
    pub const ALL: [Target; 6] = [
        Target::Container,
        Target::Left,
        Target::Right,
        Target::Affordance,
        Target::Message,
        Target::Content,
    ];
}

/// Animatable numeric property of a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Property {
    X,
    Y,
    Scale,
    Blur,
    Opacity,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    /// Translation from the node's anchor, in CSS pixels.
    pub offset: Vec2,
    pub scale: f32,
    /// Filter blur radius in CSS pixels.
    pub blur: f32,
    pub opacity: f32,
    pub displayed: bool,
    /// Whether the node receives pointer events.
    pub interactive: bool,
    /// Whether the node carries the "active" class.
    pub active: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            offset: Vec2::ZERO,
            scale: 1.0,
            blur: 0.0,
            opacity: 1.0,
            displayed: true,
            interactive: true,
            active: false,
        }
    }
}

impl Node {
    /// A node that starts out invisible and inert.
    pub fn hidden() -> Self {
        Self {
            opacity: 0.0,
            displayed: false,
            interactive: false,
            ..Self::default()
        }
    }

    pub fn get(&self, property: Property) -> f32 {
        match property {
            Property::X => self.offset.x,
            Property::Y => self.offset.y,
            Property::Scale => self.scale,
            Property::Blur => self.blur,
            Property::Opacity => self.opacity,
        }
    }

    pub fn set(&mut self, property: Property, value: f32) {
        match property {
            Property::X => self.offset.x = value,
            Property::Y => self.offset.y = value,
            Property::Scale => self.scale = value,
            Property::Blur => self.blur = value.max(0.0),
            Property::Opacity => self.opacity = value,
        }
    }

    #[inline]
    pub fn add(&mut self, property: Property, delta: f32) {
        let v = self.get(property);
        self.set(property, v + delta);
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub container: Node,
    pub left: Node,
    pub right: Node,
    /// Positioned relative to the viewport center, like the draggables.
    pub affordance: Node,
    pub message: Node,
    pub content: Node,
}

impl Scene {
    /// Initial page state: draggables at their start offsets and rest scale,
    /// everything downstream of the interaction hidden.
    pub fn initial(left: Vec2, right: Vec2, rest_scale: f32) -> Self {
        let element = |offset| Node {
            offset,
            scale: rest_scale,
            ..Node::default()
        };
        Self {
            container: Node::default(),
            left: element(left),
            right: element(right),
            affordance: Node {
                scale: 0.0,
                ..Node::hidden()
            },
            message: Node::hidden(),
            content: Node::hidden(),
        }
    }

    pub fn node(&self, target: Target) -> &Node {
        match target {
            Target::Container => &self.container,
            Target::Left => &self.left,
            Target::Right => &self.right,
            Target::Affordance => &self.affordance,
            Target::Message => &self.message,
            Target::Content => &self.content,
        }
    }

    pub fn node_mut(&mut self, target: Target) -> &mut Node {
        match target {
            Target::Container => &mut self.container,
            Target::Left => &mut self.left,
            Target::Right => &mut self.right,
            Target::Affordance => &mut self.affordance,
            Target::Message => &mut self.message,
            Target::Content => &mut self.content,
        }
    }

    #[inline]
    pub fn element(&self, side: Side) -> &Node {
        self.node(side.target())
    }

    #[inline]
    pub fn element_mut(&mut self, side: Side) -> &mut Node {
        self.node_mut(side.target())
    }

    /// Center-to-center distance of the draggables.
    #[inline]
    pub fn separation(&self) -> f32 {
        self.left.offset.distance(self.right.offset)
    }
}
