//! Canonical hostname generation from repository identifiers.
//!
//! Deployment conventions name an application after its repository slug
//! and project group, and publish its load-balancer record as
//! `{app}.{environment}.{domain}`. The generated name is consistency
//! metadata; the record target always comes from the live load-balancer
//! lookup.

/// Derives conventional DNS names for one application
#[derive(Debug, Clone)]
pub struct HostnameGenerator {
    app_label: String,
    environment: String,
    domain: String,
}

impl HostnameGenerator {
    /// Build a generator from repository group/slug identifiers.
    /// Either identifier may be empty; the label is whatever remains.
    #[must_use]
    pub fn new(group: &str, slug: &str, environment: &str, domain: &str) -> Self {
        Self {
            app_label: app_label(group, slug),
            environment: environment.to_lowercase(),
            domain: domain.to_lowercase(),
        }
    }

    /// Application label (`{slug}{group}`, lowercased and sanitized)
    #[must_use]
    pub fn app(&self) -> &str {
        &self.app_label
    }

    /// Conventional load-balancer hostname (`{app}.{env}.{domain}`)
    #[must_use]
    pub fn elb(&self) -> String {
        format!("{}.{}.{}", self.app_label, self.environment, self.domain)
    }
}

/// Application label: slug then group, lowercased, restricted to the
/// characters valid in a DNS label.
fn app_label(group: &str, slug: &str) -> String {
    let mut label = String::with_capacity(group.len() + slug.len());
    for part in [slug, group] {
        label.extend(
            part.to_lowercase()
                .chars()
                .filter(|c| c.is_ascii_alphanumeric() || *c == '-'),
        );
    }
    label
}
