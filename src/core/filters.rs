use crate::models::Provider;

/// Check if a provider may be shown to customers at all
///
/// Approval and online status are orthogonal gates; both are required.
#[inline]
pub fn is_visible(provider: &Provider) -> bool {
    provider.is_approved && provider.is_online
}

/// Stage 1 of the search pipeline: keep approved, online providers
///
/// Stable filter; input order is preserved.
pub fn visible_providers(all: &[Provider]) -> Vec<Provider> {
    all.iter().filter(|p| is_visible(p)).cloned().collect()
}
