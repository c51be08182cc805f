//! One parser per scheduler query format.

mod boolean;
mod condor;
mod default_json;
mod fork;
mod load_leveler;
mod lsf;
mod pbs;
mod pbs_xml;
mod qstat_xml;
mod sge;
mod slurm;
mod torque;
mod torque_xml;

#[rustfmt::skip]
pub use {
    boolean::DefaultBooleanStatusResponseParser,
    condor::CondorJobStatusResponseParser,
    default_json::DefaultJsonStatusResponseParser,
    fork::ForkJobStatusResponseParser,
    load_leveler::LoadLevelerJobStatusResponseParser,
    lsf::LsfJobStatusResponseParser,
    pbs::PbsJobStatusResponseParser,
    pbs_xml::PbsXmlJobStatusResponseParser,
    sge::SgeJobStatusResponseParser,
    slurm::SlurmJobStatusResponseParser,
    torque::TorqueJobStatusResponseParser,
    torque_xml::TorqueXmlJobStatusResponseParser,
};

/// Trimmed, non-empty lines of a response.
pub(crate) fn lines(response: &str) -> impl Iterator<Item = &str> {
    response.lines().map(str::trim).filter(|l| !l.is_empty())
}

/// Case-insensitive check for scheduler diagnostics in a response.
pub(crate) fn mentions_any(response: &str, needles: &[&str]) -> bool {
    let response = response.to_lowercase();
    needles.iter().any(|n| response.contains(n))
}

/// Whether a scheduler job id token refers to `remote_job_id`, either exactly
/// or qualified with the server name (`42.head-node`).
pub(crate) fn is_same_job(token: &str, remote_job_id: &str) -> bool {
    token == remote_job_id
        || token
            .strip_prefix(remote_job_id)
            .is_some_and(|rest| rest.starts_with('.'))
}

/// Status column of a `qstat -a` summary line. The stock layouts carry it
/// second to last; customised layouts are scanned right to left for a single
/// letter column, never reading the job id itself.
pub(crate) fn qstat_summary_state<'a>(tokens: &[&'a str]) -> Option<&'a str> {
    if matches!(tokens.len(), 6 | 11) {
        return Some(tokens[tokens.len() - 2]);
    }
    tokens
        .iter()
        .skip(1)
        .rev()
        .find(|t| t.len() == 1 && t.chars().all(|c| c.is_ascii_alphabetic()))
        .copied()
}
