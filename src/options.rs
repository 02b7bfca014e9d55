/// What to do with input points that have NaN or infinite coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum NonFinite {
    /// Fail the build with [`BuildError::NonFinite`](crate::BuildError::NonFinite)
    #[default]
    Reject,
    /// Leave the point out of the tree
    Skip,
}

/// Options controlling how a [`KdTree`](crate::KdTree) is built
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BuildOptions {
    pub non_finite: NonFinite,
}

impl BuildOptions {
    /// Set the policy for non-finite input points
    pub fn non_finite(mut self, policy: NonFinite) -> Self {
        self.non_finite = policy;
        self
    }
}
