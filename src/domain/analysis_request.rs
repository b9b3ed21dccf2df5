/// A validated request to research one company.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    company_input: String,
    sector: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Company input is required")]
    EmptyCompanyInput,
}

impl AnalysisRequest {
    /// Trims both fields. A blank sector is treated as absent.
    pub fn new(company_input: &str, sector: Option<&str>) -> Result<Self, ValidationError> {
        let company_input = company_input.trim();
        if company_input.is_empty() {
            return Err(ValidationError::EmptyCompanyInput);
        }

        let sector = sector
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from);

        Ok(Self {
            company_input: company_input.to_string(),
            sector,
        })
    }

    pub fn company_input(&self) -> &str {
        &self.company_input
    }

    pub fn sector(&self) -> Option<&str> {
        self.sector.as_deref()
    }
}
