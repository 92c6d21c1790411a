//! Bundled portfolio content.
//!
//! Everything here is `'static` and read-only. The UI only ever borrows it.
//!
//! ```text
//! content.rs (static records)
//!        │
//!        ▼
//!   search.rs (filter by query)
//!        │
//!        ▼
//!   App (selection, expanded id) ──▶ ui/
//! ```

/// One skill category, shown as a card in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    /// Unique identifier, used to track the expanded card
    pub id: &'static str,
    pub title: &'static str,
    /// Emoji shown before the title
    pub icon: &'static str,
    pub description: &'static str,
    /// Gradient name, e.g. `from-blue-500 to-indigo-600`
    pub color: &'static str,
    /// Detail lines shown in the expanded overlay
    pub items: &'static [&'static str],
}

/// Cells per row of the skill matrix
pub const MATRIX_COLUMNS: usize = 3;

impl Skill {
    /// Look up a bundled skill by id
    pub fn by_id(id: &str) -> Option<&'static Skill> {
        SKILLS.iter().find(|s| s.id == id)
    }

    /// Fixed `(row, col)` cell of a bundled skill in the skill matrix.
    ///
    /// Independent of the search filter and of how many columns the grid
    /// is drawn with.
    pub fn matrix_coord(&self) -> Option<(usize, usize)> {
        SKILLS
            .iter()
            .position(|s| s.id == self.id)
            .map(|i| (i / MATRIX_COLUMNS, i % MATRIX_COLUMNS))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub github_link: Option<&'static str>,
    pub demo_link: Option<&'static str>,
}

/// A social profile or résumé document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub name: &'static str,
    pub url: &'static str,
    /// Short glyph for the terminal (the web build used inline SVG)
    pub icon: &'static str,
    pub color: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactInfo {
    pub name: &'static str,
    pub role: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub location: &'static str,
}

impl ContactInfo {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    /// `tel:` URI with spaces stripped
    pub fn tel(&self) -> String {
        let digits: String = self.phone.chars().filter(|c| !c.is_whitespace()).collect();
        format!("tel:{}", digits)
    }
}

pub const CONTACT: ContactInfo = ContactInfo {
    name: "Shreeshesh Regmi",
    role: "DEVOPS_ENGINEER",
    email: "shreeshesh.regmi@gmail.com",
    phone: "+977 9704556365",
    location: "Kathmandu, Nepal",
};

pub const SKILLS: &[Skill] = &[
    Skill {
        id: "foundations",
        title: "FOUNDATIONS",
        icon: "🏗️",
        color: "from-blue-500 to-indigo-600",
        description: "Core Linux and system administration expertise.",
        items: &[
            "Installation: Ubuntu, RHEL/Rocky, Debian, Arch Linux, partitioning, GRUB, RAID",
            "Config: Networking (IP, DNS, NTP), storage (LVM, ext4/xfs), systemd, kernel tuning",
            "Users: Account mgmt, sudo, SSH keys, Privileged Access Management (PAM) policies",
            "Packages: apt/dnf, repos, security updates",
            "Security: Firewalls, SELinux/AppArmor, fail2ban, certificates, Lynis",
            "Monitoring: top/htop, iostat, logs (journalctl), alerting",
            "Backup: rsync, tar, restic, test restores",
            "Troubleshooting: Boot issues, strace, SMART checks, OOM (Out of Memory) debugging",
        ],
    },
    Skill {
        id: "automation",
        title: "AUTOMATION & SCRIPTING",
        icon: "⚡",
        color: "from-orange-500 to-red-600",
        description: "Streamlining processes with robust scripting and configuration management.",
        items: &[
            "Python, Bash, PowerShell for automation",
            "Ansible playbooks for configuration management",
            "API interactions with Python requests and GraphQL",
            "Custom CLI tooling development with Click/Argparse",
            "System health check automation with cron/systemd",
            "Infrastructure automation with Terraform/Pulumi",
            "CI/CD pipeline automation with GitHub Actions/GitLab CI",
            "ChatOps integration with Slack/Teams bots",
        ],
    },
    Skill {
        id: "containers",
        title: "CONTAINERIZATION",
        icon: "📦",
        color: "from-green-500 to-emerald-600",
        description: "Modern application packaging and management with Docker and container tools.",
        items: &[
            "Docker: Writing multi-stage Dockerfiles, Docker Compose",
            "Image optimization & shrinking techniques",
            "Container debugging with dive and strace",
            "Health checks and liveness/readiness probes",
            "Private registry management with Docker Hub/ECR/GitLab",
            "BuildKit for parallel builds and caching",
            "Docker Swarm for small to medium clusters",
        ],
    },
    Skill {
        id: "orchestration",
        title: "KUBERNETES",
        icon: "☸️",
        color: "from-blue-600 to-blue-800",
        description: "Scalable container orchestration and management with Kubernetes.",
        items: &[
            "Pods, Deployments, Services, Ingress, and Volumes",
            "ConfigMaps/Secrets management and external vault integration",
            "Helm charts development & maintenance with linting",
            "Kubernetes Operators and CRDs development",
            "Namespaces, RBAC, Network Policies, and Pod Security Policies",
            "StatefulSets for databases and stateful applications",
            "Calico/Cilium for advanced network policies",
            "NGINX/Traefik Ingress controllers",
            "HPA/VPA/KEDA for autoscaling",
            "Cluster upgrades, version skew management, and disaster recovery",
        ],
    },
    Skill {
        id: "pipelines",
        title: "CI/CD & GITOPS",
        icon: "🔄",
        color: "from-orange-400 to-yellow-600",
        description: "Automating code delivery from commit to production with GitOps workflows.",
        items: &[
            "GitHub Actions, GitLab CI/CD, Bitbucket Pipelines for CI/CD",
            "ArgoCD, Flux v2 for GitOps deployments",
            "Jenkins Pipeline as Code with Groovy",
            "Tekton pipelines for cloud-native CI/CD",
            "Automated testing (unit, integration, e2e) with Playwright/Cypress",
            "Canary deployments with Argo Rollouts",
            "Blue/green deployments and traffic management",
            "Dependency management and vulnerability scanning",
            "Pipeline observability and debugging",
        ],
    },
    Skill {
        id: "cloud",
        title: "CLOUD PLATFORMS",
        icon: "☁️",
        color: "from-cyan-500 to-blue-500",
        description: "Multi-cloud infrastructure design and operation with AWS, Azure, and GCP.",
        items: &[
            "AWS: EC2/EKS, IAM, VPC, S3, Lambda, Route 53, CloudWatch",
            "Azure: AKS, VMs, Storage, Functions, Virtual Networks",
            "GCP: GKE, Compute Engine, Storage, Cloud Functions",
            "OCI, Linode, DigitalOcean for cost-effective solutions",
            "Cost optimization & FinOps with CloudWatch/Azure Monitor",
            "Multi-cloud disaster recovery strategies and replication",
            "Serverless architectures with Lambda/Functions",
            "Cloud security best practices and compliance",
        ],
    },
    Skill {
        id: "observability",
        title: "OBSERVABILITY",
        icon: "📊",
        color: "from-purple-500 to-pink-600",
        description: "Gaining deep insights into system performance with metrics, logging, and tracing.",
        items: &[
            "Prometheus + Grafana dashboards for monitoring",
            "Loki, ELK/PLG stack for centralized logging",
            "TIG stack (Telegraf, InfluxDB, Grafana) for IoT/edge",
            "OpenTelemetry integration for distributed tracing",
            "Jaeger and Zipkin for microservices tracing",
            "SLOs, SLAs, and actionable alerting with Alertmanager",
            "Distributed tracing for debugging complex systems",
            "Error tracking with Sentry and New Relic",
        ],
    },
    Skill {
        id: "iac",
        title: "INFRASTRUCTURE AS CODE",
        icon: "🛠️",
        color: "from-indigo-500 to-purple-600",
        description: "Provisioning and managing infrastructure with code using Terraform and friends.",
        items: &[
            "Terraform / OpenTofu for cloud provisioning",
            "Pulumi (IaC with TypeScript/Python)",
            "Ansible for configuration management",
            "Chef/Puppet for legacy systems",
            "Version control for infrastructure with Git",
            "Atlantis for Terraform pull request automation",
            "Spacelift for Infrastructure as Code management",
            "Reproducible cloud environments with Packer",
        ],
    },
    Skill {
        id: "devsecops",
        title: "DEVSECOPS",
        icon: "🔐",
        color: "from-red-500 to-rose-700",
        description: "Security shifted left in the development lifecycle with DevSecOps practices.",
        items: &[
            "Snyk, Trivy, Aqua for container scanning",
            "SonarQube, Checkmarx, CodeQL for SAST",
            "Checkov, tfsec, Terrascan for IaC Security",
            "Sysdig, Falco, Aqua for runtime security",
            "HashiCorp Vault, SOPS, AWS Secrets Manager",
            "OPA/Gatekeeper, Kyverno for policy enforcement",
            "Container hardening and least privilege",
            "Compliance as Code with CIS benchmarks",
            "Incident response and forensics",
        ],
    },
];

pub const PROJECTS: &[Project] = &[
    Project {
        id: "kubernetes-cluster",
        title: "Highly Available Kubernetes Cluster",
        description: "Architected and implemented a highly available Kubernetes cluster using kubeadm on AWS EC2 instances.",
        technologies: &["Kubernetes", "AWS", "Terraform", "Calico", "HAProxy"],
        github_link: Some("https://github.com/regmishreeshesh-hub/ha-kubernetes-cluster"),
        demo_link: Some("https://k8s.shreeshesh.com"),
    },
    Project {
        id: "microservices-demo",
        title: "Microservices Application Deployment",
        description: "Built and deployed a multi-language microservices application with CI/CD pipelines and observability.",
        technologies: &["Node.js", "Python", "Docker", "Kubernetes", "Prometheus", "Grafana"],
        github_link: Some("https://github.com/regmishreeshesh-hub/microservices-demo"),
        demo_link: Some("https://demo.shreeshesh.com"),
    },
    Project {
        id: "gitops-argocd",
        title: "GitOps with ArgoCD",
        description: "Implemented GitOps workflows using ArgoCD for continuous delivery and deployment.",
        technologies: &["ArgoCD", "Kubernetes", "GitHub Actions", "Helm"],
        github_link: Some("https://github.com/regmishreeshesh-hub/gitops-argocd"),
        demo_link: Some("https://argocd.shreeshesh.com"),
    },
    Project {
        id: "monitoring-stack",
        title: "Enterprise Monitoring Stack",
        description: "Designed and deployed a comprehensive monitoring stack for infrastructure and applications.",
        technologies: &["Prometheus", "Grafana", "Loki", "Alertmanager", "Node Exporter"],
        github_link: Some("https://github.com/regmishreeshesh-hub/monitoring-stack"),
        demo_link: Some("https://monitoring.shreeshesh.com"),
    },
];

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        name: "GitHub",
        url: "https://github.com/regmishreeshesh-hub",
        icon: "🐙",
        color: "from-gray-500 to-gray-700",
    },
    SocialLink {
        name: "Resume (DOCX)",
        url: "https://docs.google.com/document/d/1toJdmql6JRBV0Gj80xhro4LOf-gUGLtl/edit?usp=drive_link&ouid=107834041569382404825&rtpof=true&sd=true",
        icon: "📄",
        color: "from-green-500 to-emerald-600",
    },
    SocialLink {
        name: "Resume (PDF)",
        url: "https://drive.google.com/file/d/14KuBd5zaL_I9JNKhd1sSDx5sSrBXeKX0/view?usp=drive_link",
        icon: "📕",
        color: "from-red-500 to-rose-600",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_skill_ids_unique() {
        let ids: HashSet<_> = SKILLS.iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), SKILLS.len());
    }

    #[test]
    fn test_by_id() {
        assert_eq!(Skill::by_id("orchestration").map(|s| s.title), Some("KUBERNETES"));
        assert!(Skill::by_id("missing").is_none());
    }

    #[test]
    fn test_matrix_coord() {
        assert_eq!(SKILLS[0].matrix_coord(), Some((0, 0)));
        assert_eq!(SKILLS[4].matrix_coord(), Some((1, 1)));
        assert_eq!(SKILLS[8].matrix_coord(), Some((2, 2)));
    }

    #[test]
    fn test_contact_uris() {
        assert_eq!(CONTACT.mailto(), "mailto:shreeshesh.regmi@gmail.com");
        assert_eq!(CONTACT.tel(), "tel:+9779704556365");
    }

    #[test]
    fn test_every_skill_has_items() {
        assert!(SKILLS.iter().all(|s| !s.items.is_empty()));
    }
}
