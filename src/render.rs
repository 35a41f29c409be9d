use crate::dom::Surfaces;
use crate::style;
use entrance_core::{Scene, Target};

/// Writes the scene to inline styles, skipping surfaces whose style text has
/// not changed since the previous frame.
pub struct Renderer {
    surfaces: Surfaces,
    last_style: [String; 6],
    last_active: [Option<bool>; 6],
}

impl Renderer {
    pub fn new(surfaces: Surfaces) -> Self {
        Self {
            surfaces,
            last_style: Default::default(),
            last_active: [None; 6],
        }
    }

    #[inline]
    pub fn surfaces(&self) -> &Surfaces {
        &self.surfaces
    }

    pub fn render(&mut self, scene: &Scene) {
        for (i, target) in Target::ALL.into_iter().enumerate() {
            let node = scene.node(target);
            let el = self.surfaces.get(target);

            let css = style::node_style(target, node);
            if self.last_style[i] != css {
                _ = el.set_attribute("style", &css);
                self.last_style[i] = css;
            }

            if let Some(class) = style::active_class(target) {
                if self.last_active[i] != Some(node.active) {
                    let cl = el.class_list();
                    if node.active {
                        _ = cl.add_1(class);
                    } else {
                        _ = cl.remove_1(class);
                    }
                    self.last_active[i] = Some(node.active);
                }
            }
        }
    }
}
