//! Resolving where a pointer event really came from.
//!
//! When the picker is rendered inside an encapsulated subtree (shadow-DOM
//! style), the host reports a retargeted `target` that points at the
//! boundary element rather than the node that was clicked. The composed path
//! still lists the real origin first, so resolvers prefer it when
//! encapsulation was crossed.

/// Opaque handle for a host element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathEntry {
    pub element: ElementId,
    pub has_shadow_root: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointerEvent {
    /// Immediate (possibly retargeted) target.
    pub target: ElementId,
    /// Origin first, outermost ancestor last. `None` when the host cannot
    /// report a path.
    pub composed_path: Option<Vec<PathEntry>>,
}

impl PointerEvent {
    pub fn new(target: ElementId) -> Self {
        Self {
            target,
            composed_path: None,
        }
    }

    pub fn with_path(target: ElementId, composed_path: Vec<PathEntry>) -> Self {
        Self {
            target,
            composed_path: Some(composed_path),
        }
    }
}

/// Parts of the picker that count as "inside" for outside-click detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerRegion {
    Dialog,
    TriggerButton,
}

/// Containment queries answered by the presentation layer.
pub trait ElementTree {
    /// Whether `element` is the region's root or one of its descendants.
    fn contains(&self, region: PickerRegion, element: ElementId) -> bool;
}

pub trait OriginResolver {
    fn resolve(&self, event: &PointerEvent) -> ElementId;
}

/// Uses the composed path when it crossed an encapsulation boundary, falling
/// back to the immediate target otherwise (or when no path is available).
#[derive(Debug, Clone, Copy, Default)]
pub struct ComposedPathResolver;

impl OriginResolver for ComposedPathResolver {
    fn resolve(&self, event: &PointerEvent) -> ElementId {
        let Some(path) = event.composed_path.as_deref() else {
            return event.target;
        };
        let Some(origin) = path.first() else {
            return event.target;
        };

        let crossed_boundary =
            !origin.has_shadow_root && path.iter().any(|entry| entry.has_shadow_root);
        if crossed_boundary {
            origin.element
        } else {
            event.target
        }
    }
}

/// For hosts without path support: always the immediate target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TargetResolver;

impl OriginResolver for TargetResolver {
    fn resolve(&self, event: &PointerEvent) -> ElementId {
        event.target
    }
}
