//! Case selection for sum-type builders.
//!
//! A sum-type builder owns one [`Selector`]. The selector is either
//! untagged or holds exactly one case builder. Touching a different case
//! discards the current case builder and starts the new one from scratch;
//! touching the active case returns the same builder again.

use crate::BuildError;

/// The generated enum of case builders for one sum type.
pub trait CaseSet {
    type Output;

    /// Name of the sum type, for [`BuildError::NoCaseSelected`].
    const TARGET: &'static str;

    fn case_name(&self) -> &'static str;

    /// Build the sum value from the held case builder.
    fn build(&self) -> Result<Self::Output, BuildError>;
}

/// One case builder of a [`CaseSet`].
pub trait CaseOf<S: CaseSet>: Sized {
    fn wrap(self) -> S;

    fn project(case: &S) -> Option<&Self>;

    /// This case's builder in `active`, first installing a fresh one if
    /// another case or none is held there.
    fn select(active: &mut Option<S>) -> &mut Self;
}

pub struct Selector<S> {
    active: Option<S>,
}

impl<S> Default for Selector<S> {
    fn default() -> Self {
        Selector { active: None }
    }
}

impl<S: CaseSet> Selector<S> {
    pub const fn new() -> Self {
        Selector { active: None }
    }

    pub fn active(&self) -> Option<&S> {
        self.active.as_ref()
    }

    pub fn is_selected(&self) -> bool {
        self.active.is_some()
    }

    pub fn selected_case(&self) -> Option<&'static str> {
        self.active.as_ref().map(CaseSet::case_name)
    }

    /// The case builder for `B`, if `B` is the active case.
    pub fn get<B: CaseOf<S>>(&self) -> Option<&B> {
        self.active.as_ref().and_then(B::project)
    }

    /// The case builder for `B`, selecting it first if needed.
    ///
    /// Selecting a different case discards the previously active builder.
    pub fn select<B: CaseOf<S>>(&mut self) -> &mut B {
        if let Some(previous) = &self.active {
            if B::project(previous).is_none() {
                tracing::trace!(
                    target_type = S::TARGET,
                    from = previous.case_name(),
                    "case builder discarded by select"
                );
            }
        }
        B::select(&mut self.active)
    }

    /// Make `builder` the active case, returning the previous one.
    pub fn replace<B: CaseOf<S>>(&mut self, builder: B) -> Option<S> {
        self.retag(builder.wrap())
    }

    /// Make an already wrapped case active, returning the previous one.
    pub fn set(&mut self, case: S) -> Option<S> {
        self.retag(case)
    }

    /// Return to the untagged state.
    pub fn clear(&mut self) -> Option<S> {
        self.active.take()
    }

    /// Build from the active case, or fail if none was selected.
    pub fn build(&self) -> Result<S::Output, BuildError> {
        match &self.active {
            Some(case) => case.build(),
            None => Err(BuildError::NoCaseSelected { target: S::TARGET }),
        }
    }

    fn retag(&mut self, case: S) -> Option<S> {
        let previous = self.active.replace(case);
        if let Some(previous) = &previous {
            tracing::trace!(
                target_type = S::TARGET,
                from = previous.case_name(),
                to = self.selected_case(),
                "case builder replaced"
            );
        }
        previous
    }
}

#[cfg(test)]
mod tests;
