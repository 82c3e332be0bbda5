//! Resource limits for validation.
//!
//! The grammar engine recurses once per nested container, so an adversarial
//! input like `[[[[...` can exhaust the stack. The nesting limit turns that
//! into an ordinary syntax error.

/// Stack reserved for the validator outside the container recursion.
const STACK_BASE: usize = 1024 * 1024;

/// Stack reserved per nesting level. One level costs an object or array
/// frame, a value frame and their rule wrappers, a few KiB in debug builds.
const STACK_PER_LEVEL: usize = 16 * 1024;

/// Resource limits for validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum nesting depth for arrays/objects.
    pub max_nesting_depth: u64,
}

impl Limits {
    /// Default limits, safe on a 2 MiB thread stack.
    pub const fn standard() -> Self {
        Self {
            max_nesting_depth: 512,
        }
    }

    /// Deeper nesting for trusted input.
    ///
    /// Needs more stack than a default thread has in debug builds; run the
    /// validator on a thread sized with [`Limits::stack_size`].
    pub const fn lenient() -> Self {
        Self {
            max_nesting_depth: 4096,
        }
    }

    /// Same limits with a different nesting depth.
    pub const fn with_max_nesting_depth(self, max_nesting_depth: u64) -> Self {
        Self { max_nesting_depth }
    }

    /// Thread stack size that fits validation at the maximum nesting depth.
    pub fn stack_size(&self) -> usize {
        let levels = usize::try_from(self.max_nesting_depth).unwrap_or(usize::MAX);
        levels
            .saturating_mul(STACK_PER_LEVEL)
            .saturating_add(STACK_BASE)
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self::standard()
    }
}
