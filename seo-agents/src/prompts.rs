//! Prompt templates for the three agents.
//!
//! Each template renders a deterministic instruction string: a role
//! statement, the upstream data (JSON-serialized or raw text, with page
//! content truncated to a bounded character budget), an explicit example of
//! the expected output shape, and a JSON-only closing instruction.

use seo_core::{OrganicResult, PageAuditOutput, Result, ScrapedPage, SerpAnalysis};

/// Character budget for page markdown embedded in the audit prompt.
pub const MARKDOWN_CHAR_BUDGET: usize = 8000;

pub const AUDITOR_SYSTEM_PROMPT: &str =
    "You are an expert SEO auditor. Always respond with valid JSON only.";
pub const ANALYST_SYSTEM_PROMPT: &str =
    "You are an expert SEO competitive analyst. Always respond with valid JSON only.";
pub const ADVISOR_SYSTEM_PROMPT: &str =
    "You are a senior SEO consultant creating detailed audit reports.";

/// Truncate to at most `budget` characters without splitting a code point.
fn truncate_chars(text: &str, budget: usize) -> &str {
    match text.char_indices().nth(budget) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

fn or_not_available(value: &str) -> &str {
    if value.is_empty() { "Not available" } else { value }
}

/// Agent 1 prompt: on-page audit of the scraped content.
pub fn audit_prompt(url: &str, page: &ScrapedPage) -> String {
    format!(
        r#"You are an expert SEO auditor. Analyze the following webpage data and provide a comprehensive on-page SEO audit.

URL: {url}

METADATA:
Title: {title}
Description: {description}
Keywords: {keywords}

MARKDOWN CONTENT:
{markdown}

LINKS DATA:
Total Links: {total_links}

INSTRUCTIONS:
1. Extract and analyze:
   - Title tag (exact text)
   - Meta description (exact text)
   - Primary H1 heading
   - Secondary headings (H2-H4) with their text
   - Approximate word count
   - Content summary (2-3 sentences)

2. Analyze links:
   - Count internal vs external links
   - Note any obvious issues

3. Identify technical SEO issues:
   - Missing elements
   - Optimization opportunities
   - Technical problems

4. Infer target keywords:
   - Primary keyword (1-3 words most likely targeted)
   - 2-5 secondary keywords
   - Search intent (informational/transactional/navigational/commercial)
   - 3-5 supporting topics

Provide your response as a valid JSON object matching this structure:
{{
  "audit_results": {{
    "title_tag": "...",
    "meta_description": "...",
    "primary_heading": "...",
    "secondary_headings": [{{"tag": "h2", "text": "..."}}],
    "word_count": 0,
    "content_summary": "...",
    "link_counts": {{
      "internal": 0,
      "external": 0,
      "broken": 0,
      "notes": "..."
    }},
    "technical_findings": ["..."],
    "content_opportunities": ["..."]
  }},
  "target_keywords": {{
    "primary_keyword": "...",
    "secondary_keywords": ["..."],
    "search_intent": "...",
    "supporting_topics": ["..."]
  }}
}}

Return ONLY the JSON object, no other text."#,
        url = url,
        title = or_not_available(&page.metadata.title),
        description = or_not_available(&page.metadata.description),
        keywords = or_not_available(&page.metadata.keywords),
        markdown = truncate_chars(&page.markdown, MARKDOWN_CHAR_BUDGET),
        total_links = page.links.len(),
    )
}

/// Agent 2 prompt: competitive analysis of the organic results.
pub fn serp_prompt(primary_keyword: &str, results: &[OrganicResult]) -> Result<String> {
    let serp_summary = serde_json::to_string_pretty(results)?;
    Ok(format!(
        r#"You are an expert SEO competitive analyst. Analyze these Google search results for the keyword: "{primary_keyword}"

SERP RESULTS (Top 10):
{serp_summary}

INSTRUCTIONS:
Analyze the competitive landscape and provide:

1. Parse top 10 results with:
   - Rank (1-10)
   - Title
   - URL
   - Snippet
   - Content type (blog post, landing page, tool, directory, video, guide, etc.)

2. Identify patterns:
   - Common title patterns (e.g., "Best X", "Top 10", "How to", year mentions)
   - Content formats (guides, listicles, comparisons, tools, etc.)
   - People Also Ask questions (infer from context)
   - Key themes competitors emphasize
   - Differentiation opportunities (gaps in current results)

Provide your response as a valid JSON object:
{{
  "primary_keyword": "{primary_keyword}",
  "top_10_results": [
    {{
      "rank": 1,
      "title": "...",
      "url": "...",
      "snippet": "...",
      "content_type": "..."
    }}
  ],
  "title_patterns": ["..."],
  "content_formats": ["..."],
  "people_also_ask": ["..."],
  "key_themes": ["..."],
  "differentiation_opportunities": ["..."]
}}

Return ONLY the JSON object, no other text."#
    ))
}

/// Agent 3 prompt: the full report skeleton to be filled with data-grounded
/// specifics from both upstream outputs.
pub fn report_prompt(
    url: &str,
    page_audit: &PageAuditOutput,
    serp_analysis: &SerpAnalysis,
) -> Result<String> {
    let page_audit_json = serde_json::to_string_pretty(page_audit)?;
    let serp_json = serde_json::to_string_pretty(serp_analysis)?;
    Ok(format!(
        r#"You are a senior SEO consultant creating a comprehensive optimization report.

TARGET URL: {url}

PAGE AUDIT DATA:
{page_audit_json}

SERP COMPETITIVE ANALYSIS:
{serp_json}

INSTRUCTIONS:
Create a professional SEO audit report in Markdown format with these sections:

# SEO Audit Report

## Executive Summary
- Page being audited
- Primary keyword focus
- 2-3 key strengths
- 2-3 critical weaknesses
- Overall SEO health score (estimate)

## Technical & On-Page Findings

### Title Tag Analysis
- Current: [exact title, character count]
- Recommendations: [specific suggestions]

### Meta Description Analysis
- Current: [exact description, character count]
- Recommendations: [specific suggestions]

### Heading Structure
- H1: [current H1]
- H2-H4 Analysis: [structure quality]
- Recommendations: [improvements]

### Content Analysis
- Word Count: [number]
- Content Depth: [assessment]
- Readability: [assessment]
- Recommendations: [specific improvements]

### Technical Issues
[List each issue found with severity and fix]

## Keyword Strategy Analysis

### Primary Keyword: [keyword]
- Current targeting strength: [assessment]
- Search intent alignment: [assessment]
- Recommendations: [how to better optimize]

### Secondary Keywords
[List with optimization recommendations]

### Supporting Topics
[List topics to add/expand]

## Competitive SERP Analysis

### What Top Competitors Are Doing
- Common title patterns: [list]
- Dominant content formats: [list]
- Key themes: [list]

### Content Gaps & Opportunities
[Specific opportunities to differentiate]

## Prioritized Recommendations

### P0 - Critical (Implement Immediately)
1. **[Area]**: [Specific action]
   - Rationale: [Why, citing data]
   - Expected Impact: [Specific benefit]
   - Effort: [Low/Medium/High]

### P1 - High Priority (Implement This Month)
[Same format as P0]

### P2 - Medium Priority (Implement This Quarter)
[Same format as P0]

## Implementation Roadmap

### Week 1-2
[Specific tasks]

### Week 3-4
[Specific tasks]

### Month 2-3
[Specific tasks]

## Measurement Plan
- KPIs to track
- Tools to use
- Expected timeline for results

---

Be specific with data points (e.g., "Title is 45 characters, recommend 55-60").
Use actual numbers and examples from the audit data.
Make recommendations actionable and prioritized.
"#
    ))
}
