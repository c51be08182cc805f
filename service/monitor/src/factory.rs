use std::collections::HashMap;
use std::sync::Arc;

use domain_monitor::{
    model::vo::{ExecutionType, MonitoredJob, SchedulerType},
    service::{JobStatusResponseParser, JobStatusResponseParserProvider},
};

use crate::parser::*;

/// Parser registry. Batch parsers are keyed by the scheduler types they
/// declare, so every custom scheduler variant resolves to its canonical
/// parser.
pub struct JobStatusResponseParserFactory {
    batch: HashMap<SchedulerType, Arc<dyn JobStatusResponseParser>>,
    condor: Arc<dyn JobStatusResponseParser>,
    fork: Arc<dyn JobStatusResponseParser>,
    fallback: Arc<dyn JobStatusResponseParser>,
}

impl Default for JobStatusResponseParserFactory {
    fn default() -> Self {
        let batch: [Arc<dyn JobStatusResponseParser>; 6] = [
            Arc::new(SlurmJobStatusResponseParser),
            Arc::new(PbsJobStatusResponseParser),
            Arc::new(TorqueJobStatusResponseParser),
            Arc::new(SgeJobStatusResponseParser),
            Arc::new(LsfJobStatusResponseParser),
            Arc::new(LoadLevelerJobStatusResponseParser),
        ];
        batch.into_iter().fold(
            Self {
                batch: HashMap::new(),
                condor: Arc::new(CondorJobStatusResponseParser),
                fork: Arc::new(ForkJobStatusResponseParser),
                fallback: Arc::new(DefaultJsonStatusResponseParser),
            },
            Self::register,
        )
    }
}

impl JobStatusResponseParserFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Routes every scheduler type `parser` declares to it, replacing any
    /// parser registered for those types before. Used to switch Torque and
    /// PBS to their XML query formats.
    pub fn register(mut self, parser: Arc<dyn JobStatusResponseParser>) -> Self {
        for scheduler_type in parser.supported_scheduler_types() {
            self.batch.insert(*scheduler_type, parser.clone());
        }
        self
    }
}

impl JobStatusResponseParserProvider for JobStatusResponseParserFactory {
    fn get_instance(&self, job: &MonitoredJob) -> Arc<dyn JobStatusResponseParser> {
        let parser = match job.execution_type {
            ExecutionType::Condor => &self.condor,
            ExecutionType::Hpc => self.batch.get(&job.scheduler_type).unwrap_or(&self.fallback),
            ExecutionType::Cli => &self.fork,
        };
        tracing::debug!(
            remote_job_id = %job.remote_job_id,
            execution_type = ?job.execution_type,
            scheduler_type = %job.scheduler_type,
            "Selected status response parser."
        );
        parser.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXECUTION_TYPES: [ExecutionType; 3] =
        [ExecutionType::Hpc, ExecutionType::Condor, ExecutionType::Cli];

    fn job(execution_type: ExecutionType, scheduler_type: SchedulerType) -> MonitoredJob {
        MonitoredJob::new("42", execution_type, scheduler_type)
    }

    #[test]
    fn every_execution_and_scheduler_pair() {
        let factory = JobStatusResponseParserFactory::new();
        for execution_type in EXECUTION_TYPES {
            for scheduler_type in SchedulerType::ALL {
                let parser = factory.get_instance(&job(execution_type, *scheduler_type));
                let context = format!("{execution_type:?} + {scheduler_type}");
                match (execution_type, scheduler_type.canonical()) {
                    (ExecutionType::Condor, _) => {
                        assert!(Arc::ptr_eq(&parser, &factory.condor), "{context}")
                    }
                    (ExecutionType::Cli, _) => {
                        assert!(Arc::ptr_eq(&parser, &factory.fork), "{context}")
                    }
                    (
                        ExecutionType::Hpc,
                        SchedulerType::Condor | SchedulerType::Fork | SchedulerType::Unknown,
                    ) => assert!(Arc::ptr_eq(&parser, &factory.fallback), "{context}"),
                    (ExecutionType::Hpc, canonical) => {
                        let declared = parser.supported_scheduler_types();
                        assert!(declared.contains(scheduler_type), "{context}");
                        assert!(declared.contains(&canonical), "{context}");
                    }
                }
            }
        }
    }

    #[test]
    fn batch_registry_covers_the_six_batch_schedulers() {
        let factory = JobStatusResponseParserFactory::new();
        assert_eq!(factory.batch.len(), 14);
        for parser in factory.batch.values() {
            assert!(!parser.supported_scheduler_types().is_empty());
        }
        assert!(factory.condor.supported_scheduler_types().contains(&SchedulerType::Condor));
        assert!(factory.fork.supported_scheduler_types().contains(&SchedulerType::Fork));
        assert!(factory.fallback.supported_scheduler_types().is_empty());
    }

    #[test]
    fn custom_variants_share_the_canonical_parser() {
        let factory = JobStatusResponseParserFactory::new();
        for scheduler_type in SchedulerType::ALL {
            let custom = factory.get_instance(&job(ExecutionType::Hpc, *scheduler_type));
            let canonical =
                factory.get_instance(&job(ExecutionType::Hpc, scheduler_type.canonical()));
            assert!(Arc::ptr_eq(&custom, &canonical), "{scheduler_type}");
        }
    }

    #[test]
    fn registered_parser_replaces_defaults() {
        let torque_xml: Arc<dyn JobStatusResponseParser> =
            Arc::new(TorqueXmlJobStatusResponseParser);
        let pbs_xml: Arc<dyn JobStatusResponseParser> = Arc::new(PbsXmlJobStatusResponseParser);
        let factory = JobStatusResponseParserFactory::new()
            .register(torque_xml.clone())
            .register(pbs_xml.clone());

        for scheduler_type in [
            SchedulerType::Torque,
            SchedulerType::CustomTorque,
            SchedulerType::Moab,
            SchedulerType::CustomMoab,
        ] {
            let parser = factory.get_instance(&job(ExecutionType::Hpc, scheduler_type));
            assert!(Arc::ptr_eq(&parser, &torque_xml), "{scheduler_type}");
        }
        let parser = factory.get_instance(&job(ExecutionType::Hpc, SchedulerType::CustomPbs));
        assert!(Arc::ptr_eq(&parser, &pbs_xml));
        let parser = factory.get_instance(&job(ExecutionType::Hpc, SchedulerType::Slurm));
        assert!(parser.supported_scheduler_types().contains(&SchedulerType::Slurm));
        assert_eq!(factory.batch.len(), 14);
    }

    #[test]
    fn parsers_without_types_register_nothing() {
        let factory = JobStatusResponseParserFactory::new()
            .register(Arc::new(DefaultBooleanStatusResponseParser));
        assert_eq!(factory.batch.len(), 14);
    }
}
