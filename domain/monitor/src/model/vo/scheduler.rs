use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How a job is run on its execution system, which selects the parser family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum ExecutionType {
    /// Submitted to a batch scheduler.
    Hpc,
    /// Submitted to HTCondor.
    Condor,
    /// Forked directly as a process.
    #[default]
    Cli,
}

impl FromStr for ExecutionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "HPC" => Ok(Self::Hpc),
            "CONDOR" => Ok(Self::Condor),
            "CLI" => Ok(Self::Cli),
            other => Err(format!("unknown execution type: {other}")),
        }
    }
}

/// Batch scheduler flavours a remote system may run.
///
/// `Custom*` variants are site-customised deployments that answer status
/// queries the same way as their canonical scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SchedulerType {
    Lsf,
    CustomLsf,
    Loadleveler,
    CustomLoadleveler,
    Pbs,
    CustomPbs,
    Sge,
    CustomGridengine,
    Condor,
    CustomCondor,
    Fork,
    Torque,
    CustomTorque,
    Moab,
    CustomMoab,
    Slurm,
    CustomSlurm,
    #[default]
    Unknown,
}

impl SchedulerType {
    pub const ALL: &'static [SchedulerType] = &[
        Self::Lsf,
        Self::CustomLsf,
        Self::Loadleveler,
        Self::CustomLoadleveler,
        Self::Pbs,
        Self::CustomPbs,
        Self::Sge,
        Self::CustomGridengine,
        Self::Condor,
        Self::CustomCondor,
        Self::Fork,
        Self::Torque,
        Self::CustomTorque,
        Self::Moab,
        Self::CustomMoab,
        Self::Slurm,
        Self::CustomSlurm,
        Self::Unknown,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Lsf => "LSF",
            Self::CustomLsf => "CUSTOM_LSF",
            Self::Loadleveler => "LOADLEVELER",
            Self::CustomLoadleveler => "CUSTOM_LOADLEVELER",
            Self::Pbs => "PBS",
            Self::CustomPbs => "CUSTOM_PBS",
            Self::Sge => "SGE",
            Self::CustomGridengine => "CUSTOM_GRIDENGINE",
            Self::Condor => "CONDOR",
            Self::CustomCondor => "CUSTOM_CONDOR",
            Self::Fork => "FORK",
            Self::Torque => "TORQUE",
            Self::CustomTorque => "CUSTOM_TORQUE",
            Self::Moab => "MOAB",
            Self::CustomMoab => "CUSTOM_MOAB",
            Self::Slurm => "SLURM",
            Self::CustomSlurm => "CUSTOM_SLURM",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// The stock scheduler a custom deployment behaves like.
    pub fn canonical(&self) -> Self {
        match self {
            Self::CustomLsf => Self::Lsf,
            Self::CustomLoadleveler => Self::Loadleveler,
            Self::CustomPbs => Self::Pbs,
            Self::CustomGridengine => Self::Sge,
            Self::CustomCondor => Self::Condor,
            Self::CustomTorque => Self::Torque,
            Self::CustomMoab => Self::Moab,
            Self::CustomSlurm => Self::Slurm,
            other => *other,
        }
    }

    /// Command prefix the execution layer appends the remote job id to when
    /// polling for status. The output of this command is what the matching
    /// parser expects.
    pub fn query_command(&self) -> &'static str {
        match self.canonical() {
            Self::Lsf => "bjobs -w -noheader ",
            Self::Loadleveler => "llq ",
            Self::Pbs => "qstat -x -f ",
            Self::Sge => "qstat -ext -urg -xml ",
            Self::Condor => "condor_q -format '%d' JobStatus ",
            Self::Torque | Self::Moab => "qstat -a | grep ^",
            Self::Slurm => "sacct -p -o 'JOBID,State,ExitCode' -n -j ",
            _ => "ps -o pid= -o user= -o stat= -o time= -o comm= -p ",
        }
    }
}

impl fmt::Display for SchedulerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SchedulerType {
    type Err = std::convert::Infallible;

    /// Unrecognised names resolve to [`SchedulerType::Unknown`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Ok(Self::ALL
            .iter()
            .copied()
            .find(|t| t.name().eq_ignore_ascii_case(s))
            .unwrap_or_default())
    }
}
