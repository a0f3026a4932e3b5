//! The three audit agents and the collaborator clients they depend on.
//!
//! Each agent is one orchestration step: at most one collaborator call, at
//! most one completion call, and a deterministic parse. The pipeline runs
//! them strictly in sequence; see `seo-server` for the orchestrator.

pub mod advisor;
pub mod firecrawl;
pub mod page_auditor;
pub mod prompts;
pub mod serp;
pub mod serp_analyst;

pub use advisor::OptimizationAdvisor;
pub use firecrawl::{FirecrawlClient, FirecrawlConfig};
pub use page_auditor::PageAuditor;
pub use serp::{SerpClient, SerpConfig, SerpFetch, SerpSource};
pub use serp_analyst::SerpAnalyst;
