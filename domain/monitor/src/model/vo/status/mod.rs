//! Scheduler-native job status taxonomies.
//!
//! Every scheduler gets a closed enum implementing [`RemoteJobStatus`]. A
//! taxonomy only declares its values, their descriptors and its static
//! classification sets; predicates, `active` and `done` are derived from that
//! data by the trait.

mod condor;
mod condor_log;
mod default;
mod fork;
mod load_leveler;
mod lsf;
mod pbs;
mod sge;
mod slurm;
mod torque;

use std::borrow::Cow;
use std::fmt;

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

#[rustfmt::skip]
pub use {
    condor::CondorJobStatus,
    condor_log::CondorLogJobStatus,
    default::DefaultJobStatus,
    fork::ForkJobStatus,
    load_leveler::LoadLevelerJobStatus,
    lsf::LsfJobStatus,
    pbs::PbsJobStatus,
    sge::SgeJobStatus,
    slurm::SlurmJobStatus,
    torque::TorqueJobStatus,
};

/// Advisory simplification of a scheduler status into the platform lifecycle.
///
/// Terminal statuses carry no hint; callers tell success from failure with
/// [`StatusClassification::is_failure_status`] and
/// [`StatusClassification::is_done_status`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LifecycleHint {
    Queued,
    Running,
    Paused,
}

const QUEUED: Option<LifecycleHint> = Some(LifecycleHint::Queued);
const RUNNING: Option<LifecycleHint> = Some(LifecycleHint::Running);
const PAUSED: Option<LifecycleHint> = Some(LifecycleHint::Paused);
const TERMINAL: Option<LifecycleHint> = None;

/// Immutable description of one scheduler-native status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusDescriptor {
    pub code: &'static str,
    pub description: &'static str,
    pub lifecycle: Option<LifecycleHint>,
}

impl StatusDescriptor {
    pub const fn new(
        code: &'static str,
        description: &'static str,
        lifecycle: Option<LifecycleHint>,
    ) -> Self {
        Self {
            code,
            description,
            lifecycle,
        }
    }
}

/// How raw codes are compared against a taxonomy's declared codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeMatch {
    /// Byte for byte. Upper and lower case letters are distinct states.
    Exact,
    IgnoreCase,
    /// Numeric codes left-padded with zeros to three digits, then compared
    /// ignoring case.
    ZeroPaddedIgnoreCase,
}

impl CodeMatch {
    fn normalize<'a>(&self, code: &'a str) -> Cow<'a, str> {
        match self {
            Self::ZeroPaddedIgnoreCase if code.len() < 3 => Cow::Owned(format!("{code:0>3}")),
            _ => Cow::Borrowed(code),
        }
    }

    fn matches(&self, declared: &str, code: &str) -> bool {
        match self {
            Self::Exact => declared == code,
            Self::IgnoreCase | Self::ZeroPaddedIgnoreCase => declared.eq_ignore_ascii_case(code),
        }
    }
}

/// Static data and lookup shared by every scheduler taxonomy.
pub trait RemoteJobStatus:
    Copy + Eq + fmt::Debug + Send + Sync + Into<SchedulerJobStatus> + 'static
{
    /// Sentinel for anything that cannot be resolved. Its code is empty.
    const UNKNOWN: Self;

    const CODE_MATCH: CodeMatch = CodeMatch::IgnoreCase;

    /// Whether paused values still count as done.
    const PAUSED_IS_DONE: bool;

    /// Every value in declaration order. Lookup returns the first match.
    fn values() -> &'static [Self];

    fn descriptor(&self) -> StatusDescriptor;

    fn queued_statuses() -> &'static [Self];
    fn running_statuses() -> &'static [Self];
    fn paused_statuses() -> &'static [Self];
    fn failed_statuses() -> &'static [Self];
    fn unrecoverable_statuses() -> &'static [Self];
    fn unknown_statuses() -> &'static [Self];

    fn active_statuses() -> Vec<Self> {
        Self::queued_statuses()
            .iter()
            .chain(Self::running_statuses())
            .copied()
            .collect()
    }

    fn done_statuses() -> Vec<Self> {
        Self::values()
            .iter()
            .copied()
            .filter(|s| s.is_done_status())
            .collect()
    }

    /// Resolves a native code. Never fails: unmatched codes yield
    /// [`RemoteJobStatus::UNKNOWN`].
    fn value_of_code(code: &str) -> Self {
        if code.is_empty() {
            return Self::UNKNOWN;
        }
        let code = Self::CODE_MATCH.normalize(code);
        Self::values()
            .iter()
            .copied()
            .find(|s| Self::CODE_MATCH.matches(s.descriptor().code, &code))
            .unwrap_or(Self::UNKNOWN)
    }
}

/// Per-value view of a status, usable behind `dyn`.
pub trait StatusClassification: fmt::Debug + Send + Sync {
    fn code(&self) -> &'static str;
    fn description(&self) -> &'static str;
    fn mapped_lifecycle(&self) -> Option<LifecycleHint>;
    fn is_queued_status(&self) -> bool;
    fn is_running_status(&self) -> bool;
    fn is_paused_status(&self) -> bool;
    fn is_failure_status(&self) -> bool;
    fn is_unrecoverable_status(&self) -> bool;
    fn is_unknown_status(&self) -> bool;

    fn is_active_status(&self) -> bool {
        self.is_queued_status() || self.is_running_status()
    }

    fn is_done_status(&self) -> bool;
}

impl<T: RemoteJobStatus> StatusClassification for T {
    fn code(&self) -> &'static str {
        self.descriptor().code
    }

    fn description(&self) -> &'static str {
        self.descriptor().description
    }

    fn mapped_lifecycle(&self) -> Option<LifecycleHint> {
        self.descriptor().lifecycle
    }

    fn is_queued_status(&self) -> bool {
        T::queued_statuses().contains(self)
    }

    fn is_running_status(&self) -> bool {
        T::running_statuses().contains(self)
    }

    fn is_paused_status(&self) -> bool {
        T::paused_statuses().contains(self)
    }

    fn is_failure_status(&self) -> bool {
        T::failed_statuses().contains(self)
    }

    fn is_unrecoverable_status(&self) -> bool {
        T::unrecoverable_statuses().contains(self)
    }

    fn is_unknown_status(&self) -> bool {
        T::unknown_statuses().contains(self)
    }

    fn is_done_status(&self) -> bool {
        !self.is_active_status()
            && !self.is_unknown_status()
            && (T::PAUSED_IS_DONE || !self.is_paused_status())
    }
}

/// A classified status from any of the supported taxonomies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchedulerJobStatus {
    Condor(CondorJobStatus),
    CondorLog(CondorLogJobStatus),
    Default(DefaultJobStatus),
    Fork(ForkJobStatus),
    Lsf(LsfJobStatus),
    LoadLeveler(LoadLevelerJobStatus),
    Pbs(PbsJobStatus),
    Sge(SgeJobStatus),
    Slurm(SlurmJobStatus),
    Torque(TorqueJobStatus),
}

impl SchedulerJobStatus {
    /// Name of the taxonomy the value belongs to.
    pub fn taxonomy(&self) -> &'static str {
        match self {
            Self::Condor(_) => "CONDOR",
            Self::CondorLog(_) => "CONDOR_LOG",
            Self::Default(_) => "DEFAULT",
            Self::Fork(_) => "FORK",
            Self::Lsf(_) => "LSF",
            Self::LoadLeveler(_) => "LOADLEVELER",
            Self::Pbs(_) => "PBS",
            Self::Sge(_) => "SGE",
            Self::Slurm(_) => "SLURM",
            Self::Torque(_) => "TORQUE",
        }
    }

    /// Upper snake case name of the value, as the scheduler documentation
    /// spells it (`JobTerminated` becomes `JOB_TERMINATED`).
    pub fn constant_name(&self) -> String {
        let variant = format!("{:?}", self.inner());
        let mut name = String::with_capacity(variant.len() + 8);
        let mut previous: Option<char> = None;
        for c in variant.chars() {
            let boundary = previous.is_some_and(|p| p.is_lowercase() || p.is_ascii_digit());
            if c.is_uppercase() && boundary {
                name.push('_');
            }
            name.extend(c.to_uppercase());
            previous = Some(c);
        }
        name
    }

    fn inner(&self) -> &dyn StatusClassification {
        match self {
            Self::Condor(s) => s,
            Self::CondorLog(s) => s,
            Self::Default(s) => s,
            Self::Fork(s) => s,
            Self::Lsf(s) => s,
            Self::LoadLeveler(s) => s,
            Self::Pbs(s) => s,
            Self::Sge(s) => s,
            Self::Slurm(s) => s,
            Self::Torque(s) => s,
        }
    }
}

impl StatusClassification for SchedulerJobStatus {
    fn code(&self) -> &'static str {
        self.inner().code()
    }

    fn description(&self) -> &'static str {
        self.inner().description()
    }

    fn mapped_lifecycle(&self) -> Option<LifecycleHint> {
        self.inner().mapped_lifecycle()
    }

    fn is_queued_status(&self) -> bool {
        self.inner().is_queued_status()
    }

    fn is_running_status(&self) -> bool {
        self.inner().is_running_status()
    }

    fn is_paused_status(&self) -> bool {
        self.inner().is_paused_status()
    }

    fn is_failure_status(&self) -> bool {
        self.inner().is_failure_status()
    }

    fn is_unrecoverable_status(&self) -> bool {
        self.inner().is_unrecoverable_status()
    }

    fn is_unknown_status(&self) -> bool {
        self.inner().is_unknown_status()
    }

    fn is_done_status(&self) -> bool {
        self.inner().is_done_status()
    }
}

impl fmt::Display for SchedulerJobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:?}", self.taxonomy(), self.inner())
    }
}

impl Serialize for SchedulerJobStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("SchedulerJobStatus", 5)?;
        state.serialize_field("scheduler", self.taxonomy())?;
        state.serialize_field("status", &self.constant_name())?;
        state.serialize_field("code", self.code())?;
        state.serialize_field("description", self.description())?;
        state.serialize_field("lifecycle", &self.mapped_lifecycle())?;
        state.end()
    }
}

macro_rules! wrap_taxonomy {
    ($($variant:ident($taxonomy:ty)),+ $(,)?) => {
        $(
            impl From<$taxonomy> for SchedulerJobStatus {
                fn from(status: $taxonomy) -> Self {
                    Self::$variant(status)
                }
            }

            impl PartialEq<$taxonomy> for SchedulerJobStatus {
                fn eq(&self, other: &$taxonomy) -> bool {
                    matches!(self, Self::$variant(s) if s == other)
                }
            }
        )+
    };
}

wrap_taxonomy! {
    Condor(CondorJobStatus),
    CondorLog(CondorLogJobStatus),
    Default(DefaultJobStatus),
    Fork(ForkJobStatus),
    Lsf(LsfJobStatus),
    LoadLeveler(LoadLevelerJobStatus),
    Pbs(PbsJobStatus),
    Sge(SgeJobStatus),
    Slurm(SlurmJobStatus),
    Torque(TorqueJobStatus),
}

/// Shared property checks every taxonomy must satisfy.
#[cfg(test)]
pub(crate) fn assert_taxonomy_invariants<T: RemoteJobStatus>() {
    use std::collections::HashSet;

    let values = T::values();
    assert!(values.contains(&T::UNKNOWN));
    assert_eq!(T::UNKNOWN.code(), "");
    assert!(T::unknown_statuses().contains(&T::UNKNOWN));

    for value in values {
        assert_eq!(
            T::value_of_code(value.code()),
            *value,
            "code {:?} of {value:?} does not resolve to itself",
            value.code()
        );
    }
    assert_eq!(T::value_of_code("not-a-real-code"), T::UNKNOWN);

    let codes: HashSet<_> = values.iter().map(|v| v.code()).collect();
    assert_eq!(codes.len(), values.len(), "duplicate codes in {values:?}");

    for queued in T::queued_statuses() {
        assert!(!T::running_statuses().contains(queued), "{queued:?} is queued and running");
    }
    let active = T::active_statuses();
    assert_eq!(
        active.len(),
        T::queued_statuses().len() + T::running_statuses().len()
    );

    for value in values {
        assert_eq!(value.is_queued_status(), T::queued_statuses().contains(value));
        assert_eq!(value.is_running_status(), T::running_statuses().contains(value));
        assert_eq!(value.is_paused_status(), T::paused_statuses().contains(value));
        assert_eq!(value.is_failure_status(), T::failed_statuses().contains(value));
        assert_eq!(
            value.is_unrecoverable_status(),
            T::unrecoverable_statuses().contains(value)
        );
        assert_eq!(value.is_unknown_status(), T::unknown_statuses().contains(value));
        assert_eq!(value.is_active_status(), active.contains(value));
        assert_eq!(value.is_done_status(), T::done_statuses().contains(value));
        if value.is_done_status() {
            assert!(!value.is_active_status() && !value.is_unknown_status());
        }
        let wrapped: SchedulerJobStatus = (*value).into();
        assert_eq!(wrapped.code(), value.code());
        assert_eq!(wrapped.is_done_status(), value.is_done_status());
        assert_eq!(wrapped.mapped_lifecycle(), value.mapped_lifecycle());
    }
}
