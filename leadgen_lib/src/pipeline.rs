//! Lead assembly: suggestion → page fetch → extraction → enrichment → filter.

use std::future::Future;

use chrono::{DateTime, Utc};
use futures::stream::{self, StreamExt};
use leadgen_api::types::{PageContent, RawCompany};
use leadgen_api::{PageFetcher, SuggestQuery};
use serde::Serialize;

use crate::client::CachedClient;
use crate::enrich::{
    cold_email_for, guess_email, pitch_for, score_for, tags_for, IcpRule, TagPolicy,
};
use crate::extract::{extract_description, extract_social_links};
use crate::lead::Lead;
use crate::simulated::SimulatedEnrichment;

/// Anything that can turn a domain into page content.
pub trait PageSource: Sync {
    fn fetch(&self, domain: &str) -> impl Future<Output = PageContent> + Send;
}

impl PageSource for PageFetcher {
    async fn fetch(&self, domain: &str) -> PageContent {
        self.fetch_page(domain).await
    }
}

/// Knobs for a single assembly run.
#[derive(Clone, Debug)]
pub struct AssembleOptions {
    pub rules: Vec<IcpRule>,
    pub tag_policy: TagPolicy,
    /// Maximum number of page fetches in flight. `1` runs strictly in order.
    pub concurrency: usize,
}

impl AssembleOptions {
    pub fn new(rules: Vec<IcpRule>) -> Self {
        Self {
            rules,
            tag_policy: TagPolicy::default(),
            concurrency: 1,
        }
    }

    pub fn with_tag_policy(mut self, tag_policy: TagPolicy) -> Self {
        self.tag_policy = tag_policy;
        self
    }

    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }
}

/// A keyword search as submitted by the user.
#[derive(Clone, Debug)]
pub struct LeadRequest {
    pub query: SuggestQuery,
    pub min_score: u8,
}

/// Outcome of one pipeline run.
#[derive(Serialize, Clone, Debug)]
pub struct PipelineReport {
    pub keyword: String,
    pub generated_at: DateTime<Utc>,
    /// Leads assembled before the score filter.
    pub total: usize,
    /// Leads that passed the score filter, in rank order.
    pub leads: Vec<Lead>,
}

impl PipelineReport {
    /// Stamps a report with the current time.
    pub fn new(keyword: &str, total: usize, leads: Vec<Lead>) -> Self {
        Self {
            keyword: keyword.to_string(),
            generated_at: Utc::now(),
            total,
            leads,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.leads.is_empty()
    }
}

/// Turns raw suggestions into ranked leads, preserving source order.
///
/// Records without a domain are skipped and do not consume a rank. An
/// unreachable page only affects its own lead, which falls back to sentinel
/// description and social values. `on_lead` is called once per finished lead.
pub async fn assemble<P, F>(
    raw_companies: &[RawCompany],
    pages: &P,
    simulated: &dyn SimulatedEnrichment,
    options: &AssembleOptions,
    mut on_lead: F,
) -> Vec<Lead>
where
    P: PageSource,
    F: FnMut(&Lead),
{
    let candidates: Vec<&RawCompany> = raw_companies.iter().filter(|c| c.has_domain()).collect();

    let fetched: Vec<(&RawCompany, PageContent)> = stream::iter(candidates)
        .map(|company| async move {
            let page = pages.fetch(company.domain.trim()).await;
            (company, page)
        })
        .buffered(options.concurrency.max(1))
        .collect()
        .await;

    let mut leads = Vec::with_capacity(fetched.len());
    for (idx, (company, page)) in fetched.into_iter().enumerate() {
        if page.is_unreachable() {
            tracing::debug!("page unreachable for {}, using sentinels", company.domain);
        }
        let lead = build_lead(idx + 1, company, &page, simulated, options);
        on_lead(&lead);
        leads.push(lead);
    }
    leads
}

/// Builds one lead from a suggestion and its fetched page.
pub fn build_lead(
    rank: usize,
    company: &RawCompany,
    page: &PageContent,
    simulated: &dyn SimulatedEnrichment,
    options: &AssembleOptions,
) -> Lead {
    let domain = company.domain.trim();
    let description = extract_description(page);
    let social = extract_social_links(page);
    let tags = tags_for(&description, &options.rules, options.tag_policy);
    let email = guess_email(domain);
    let logo = company.logo_url().map(str::to_string);
    let score = score_for(&description, &email, logo.as_deref(), &tags);

    Lead {
        rank,
        company: company.name.clone(),
        website: format!("https://{}", domain),
        pitch: pitch_for(&company.name, domain, &description),
        cold_email: cold_email_for(&company.name, domain, &description, &email),
        email,
        logo,
        description,
        tags,
        score,
        linkedin: social.linkedin,
        twitter: social.twitter,
        tech_stack: simulated.tech_stack(domain),
        traffic: simulated.traffic(domain),
    }
}

/// Keeps leads scoring at least `min_score`, in rank order.
///
/// Ranks are left untouched, so they may have gaps afterwards.
pub fn filter_by_score(leads: Vec<Lead>, min_score: u8) -> Vec<Lead> {
    leads
        .into_iter()
        .filter(|lead| lead.score >= min_score)
        .collect()
}

/// Runs a full keyword search: suggest, assemble, filter.
///
/// Never fails: an unavailable suggestion source yields an empty report.
pub async fn run_pipeline<P, F>(
    client: &CachedClient,
    pages: &P,
    simulated: &dyn SimulatedEnrichment,
    options: &AssembleOptions,
    request: &LeadRequest,
    on_lead: F,
) -> PipelineReport
where
    P: PageSource,
    F: FnMut(&Lead),
{
    let raw = client.suggest(&request.query).await;
    tracing::debug!(
        "{} suggestions for '{}'",
        raw.len(),
        request.query.keyword
    );

    let leads = assemble(&raw, pages, simulated, options, on_lead).await;
    let total = leads.len();
    let leads = filter_by_score(leads, request.min_score);

    tracing::info!(
        "{} of {} leads for '{}' scored at least {}",
        leads.len(),
        total,
        request.query.keyword,
        request.min_score
    );

    PipelineReport::new(&request.query.keyword, total, leads)
}
