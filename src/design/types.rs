//! Endpoint descriptors - the intermediate representation shared by all emitters

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::design::rules::route_pattern;

/// HTTP methods the designer can assign
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    /// Upper-case wire name, e.g. `GET`
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }

    /// Whether requests with this method carry a JSON body
    pub fn has_request_body(&self) -> bool {
        !matches!(self, HttpMethod::Get)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a request parameter is carried
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterLocation {
    Path,
    Query,
    Body,
}

impl fmt::Display for ParameterLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterLocation::Path => write!(f, "path"),
            ParameterLocation::Query => write!(f, "query"),
            ParameterLocation::Body => write!(f, "body"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointParameter {
    pub name: String,
    pub type_text: String,
    pub location: ParameterLocation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointResponse {
    pub status_code: u16,
    pub type_text: String,
}

/// One designed REST operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointDescriptor {
    pub method: HttpMethod,
    pub path: String,
    /// Name of the source function this endpoint was designed from
    pub function_name: String,
    pub parameters: Vec<EndpointParameter>,
    pub responses: Vec<EndpointResponse>,
}

impl EndpointDescriptor {
    pub fn parameters_in(
        &self,
        location: ParameterLocation,
    ) -> impl Iterator<Item = &EndpointParameter> + '_ {
        self.parameters
            .iter()
            .filter(move |p| p.location == location)
    }

    /// Identity of the route in a router: the method plus the path with
    /// parameter names erased. Endpoints with equal keys collide.
    pub fn route_key(&self) -> (HttpMethod, String) {
        (self.method, route_pattern(&self.path))
    }
}

/// The ordered endpoint list for one generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiModel {
    pub endpoints: Vec<EndpointDescriptor>,
}

impl ApiModel {
    pub fn new(endpoints: Vec<EndpointDescriptor>) -> Self {
        Self { endpoints }
    }

    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EndpointDescriptor> {
        self.endpoints.iter()
    }

    /// For every endpoint, the index of the endpoint that actually serves its
    /// route: the last one registered under the same
    /// [`route_key`](EndpointDescriptor::route_key).
    pub fn serving_indices(&self) -> Vec<usize> {
        let keys: Vec<_> = self.endpoints.iter().map(|e| e.route_key()).collect();
        let mut last: HashMap<&(HttpMethod, String), usize> = HashMap::new();
        for (index, key) in keys.iter().enumerate() {
            last.insert(key, index);
        }
        keys.iter()
            .enumerate()
            .map(|(index, key)| last.get(key).copied().unwrap_or(index))
            .collect()
    }
}

/// Human-readable listing, one block per endpoint
impl fmt::Display for ApiModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for endpoint in &self.endpoints {
            writeln!(f, "Endpoint: {} {}", endpoint.method, endpoint.path)?;
            writeln!(f, "  Function: {}", endpoint.function_name)?;
            writeln!(f, "  Parameters:")?;
            for param in &endpoint.parameters {
                writeln!(f, "    - {} ({}): {}", param.name, param.type_text, param.location)?;
            }
            writeln!(f, "  Responses:")?;
            for response in &endpoint.responses {
                writeln!(f, "    - {}: {}", response.status_code, response.type_text)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// How the designer handles two endpoints with the same method and path
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DuplicatePolicy {
    /// Fail the design with [`DesignError::DuplicateEndpoint`](crate::design::DesignError::DuplicateEndpoint)
    #[default]
    Reject,
    /// Keep every endpoint; later registrations shadow earlier ones
    Allow,
}

/// How parameter locations are assigned
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LocationStrategy {
    /// Every parameter travels in the request body
    #[default]
    Body,
    /// Identifier-like parameters go in the path and scalars of GET/DELETE in the query
    Inferred,
}

/// Knobs of the endpoint designer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DesignOptions {
    pub locations: LocationStrategy,
    pub duplicates: DuplicatePolicy,
    /// Prepended verbatim to every derived path
    pub path_prefix: String,
}
