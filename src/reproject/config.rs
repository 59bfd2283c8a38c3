//! Reprojection settings

/// How arc terminal points are carried through a projection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArcEndpointPolicy {
    /// Project the true start and end points (derived from the original
    /// center, radius and angles) and re-derive the angles around the
    /// projected center. The radius is kept.
    #[default]
    ProjectEndpoints,
    /// Project the center only and keep the original angles.
    KeepAngles,
}

/// Settings for a reprojection run
#[derive(Debug, Clone, PartialEq)]
pub struct ReprojectConfiguration {
    /// Arc and hatch arc-edge endpoint handling.
    ///
    /// Default: [`ArcEndpointPolicy::ProjectEndpoints`].
    pub arc_policy: ArcEndpointPolicy,
    /// When `true`, top-level entities are rewritten on the rayon thread
    /// pool. Results and warning order are identical to a sequential run.
    ///
    /// Default: `false`.
    pub parallel: bool,
    /// When `true`, unit direction vectors (leader horizontal direction,
    /// spline tangents) are scaled back to unit length after projection.
    ///
    /// Default: `true`.
    pub renormalize_unit_directions: bool,
}

impl Default for ReprojectConfiguration {
    fn default() -> Self {
        Self {
            arc_policy: ArcEndpointPolicy::default(),
            parallel: false,
            renormalize_unit_directions: true,
        }
    }
}
