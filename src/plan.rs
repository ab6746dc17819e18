//! Scaffold plans: which topics go where, with which placeholder files.

use camino::{Utf8Path, Utf8PathBuf};

use crate::templates::{CONCEPT, FileTemplate, INTERVIEW_QUESTION, INTERVIEW_QUESTIONS};

pub const DEFAULT_HUB: &str = "devops-notes-hub";

const DEVOPS_TOPICS: &[&str] = &[
    "Docker",
    "Kubernetes",
    "Jenkins",
    "Terraform",
    "AWS",
    "Linux",
    "Bash",
    "Python",
    "Git",
    "Prometheus",
    "Grafana",
];

const AWS_SUBTOPICS: &[&str] = &[
    "Amazon EC2",
    "Amazon S3",
    "AWS Lambda",
    "Amazon RDS",
    "Amazon VPC",
    "Amazon CloudFront",
    "AWS IAM",
    "Amazon DynamoDB",
    "AWS Elastic Beanstalk",
    "Amazon Route 53",
];

/// Whether a plan may create its own base directory or expects a hub that
/// already exists.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BasePolicy {
    CreateIfMissing,
    RequireExisting,
}

/// Everything `scaffold::ensure_structure` needs for one pass.
#[derive(Clone, Debug)]
pub struct ScaffoldPlan {
    pub name: &'static str,
    pub base: Utf8PathBuf,
    pub topics: Vec<String>,
    pub templates: Vec<FileTemplate>,
    pub base_policy: BasePolicy,
}

/// Flat plan: one directory per DevOps tool, each with an
/// `interview_questions.md`. Creates the hub itself when missing.
pub fn devops(base: &Utf8Path) -> ScaffoldPlan {
    ScaffoldPlan {
        name: "devops",
        base: base.to_owned(),
        topics: DEVOPS_TOPICS.iter().map(|t| t.to_string()).collect(),
        templates: vec![INTERVIEW_QUESTIONS],
        base_policy: BasePolicy::CreateIfMissing,
    }
}

/// Nested plan: AWS service directories under `<hub>/AWS`, each with a
/// concept file and an interview file. The hub's `AWS` directory must already
/// exist (it is normally created by the devops plan).
pub fn aws(base: &Utf8Path) -> ScaffoldPlan {
    ScaffoldPlan {
        name: "aws",
        base: base.join("AWS"),
        topics: AWS_SUBTOPICS.iter().map(|t| t.to_string()).collect(),
        templates: vec![CONCEPT, INTERVIEW_QUESTION],
        base_policy: BasePolicy::RequireExisting,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn devops_plan_creates_its_own_hub() {
        let plan = devops(Utf8Path::new("hub"));
        assert_eq!(plan.base_policy, BasePolicy::CreateIfMissing);
        assert_eq!(plan.topics.len(), 11);
        assert_eq!(plan.templates.len(), 1);
    }

    #[test]
    fn aws_plan_targets_the_aws_subdirectory() {
        let plan = aws(Utf8Path::new("hub"));
        assert_eq!(plan.base, Utf8Path::new("hub/AWS"));
        assert_eq!(plan.base_policy, BasePolicy::RequireExisting);
        assert_eq!(plan.topics.len(), 10);
        assert_eq!(plan.templates.len(), 2);
    }
}
