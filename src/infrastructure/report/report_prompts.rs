//! Prompt text for the three report stages.

pub const DATA_ANALYST_ROLE: &str = "You are a senior financial data analyst. Interpret \
market metrics in context and report numbers exactly as you know them. If data is \
unavailable, say so plainly instead of guessing.";

pub const NEWS_ANALYST_ROLE: &str = "You are a senior financial news analyst. Focus on \
events that move markets: earnings, analyst ratings, business developments and industry \
shifts. Ignore marketing content.";

pub const RESEARCH_DIRECTOR_ROLE: &str = "You are a financial research director writing \
institutional-quality reports with clear recommendations. Never invent or round numbers \
that the analysts provided.";

pub fn data_analysis_prompt(company_input: &str, sector: Option<&str>) -> String {
    let mut prompt = format!(
        "Analyze the financial position of {company_input}. Identify the ticker symbol if a \
         company name was given. Cover stock price, market capitalization with a size \
         classification, P/E ratio with valuation context, dividend yield and trading volume."
    );
    if let Some(sector) = sector {
        prompt.push_str(&format!(
            "\n\nFrame every metric against typical {sector} sector benchmarks and name the \
             valuation drivers specific to {sector}."
        ));
    }
    prompt
}

pub fn news_research_prompt(company_input: &str, sector: Option<&str>) -> String {
    let mut prompt = format!(
        "Summarize the most financially relevant recent developments for {company_input}. For \
         each one give its likely impact on the stock (positive, negative or neutral), the \
         time horizon and your confidence."
    );
    if let Some(sector) = sector {
        prompt.push_str(&format!(
            "\n\nPrioritize {sector} industry news, regulatory changes and competitive dynamics."
        ));
    }
    prompt
}

pub fn synthesis_prompt(
    company_input: &str,
    sector: Option<&str>,
    data_analysis: &str,
    news_research: &str,
) -> String {
    let sector_line = sector
        .map(|s| format!("Sector: {s}\n"))
        .unwrap_or_default();
    format!(
        "Write a financial research report on {company_input}.\n{sector_line}\n\
         Use these sections: EXECUTIVE SUMMARY, CURRENT FINANCIAL POSITION, RECENT \
         DEVELOPMENTS & MARKET SENTIMENT, KEY INSIGHTS & ANALYSIS, RISK FACTORS, \
         INVESTMENT OUTLOOK (Buy/Hold/Sell with reasoning and time horizon).\n\n\
         ## Data analysis\n{data_analysis}\n\n## News research\n{news_research}"
    )
}
