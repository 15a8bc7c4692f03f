//! Turns function descriptors into endpoint descriptors

use std::collections::HashMap;
use tracing::{debug, info, warn};

use crate::analysis::FunctionDescriptor;
use crate::design::rules::{
    derive_path, infer_http_method, infer_location, parameter_name, shape_responses,
};
use crate::design::{
    ApiModel, DesignError, DesignOptions, DuplicatePolicy, EndpointDescriptor, EndpointParameter,
    HttpMethod, LocationStrategy, ParameterLocation,
};

/// Designs one endpoint per function, preserving input order.
#[derive(Debug, Clone, Default)]
pub struct EndpointDesigner {
    options: DesignOptions,
}

impl EndpointDesigner {
    pub fn new(options: DesignOptions) -> Self {
        Self { options }
    }

    /// Design a single endpoint. Never fails; duplicate detection needs the
    /// whole sequence and lives in [`EndpointDesigner::design`].
    pub fn design_endpoint(&self, function: &FunctionDescriptor) -> EndpointDescriptor {
        let method = infer_http_method(&function.name);
        let mut path = derive_path(&self.options.path_prefix, &function.name);

        let parameters: Vec<EndpointParameter> = function
            .parameters
            .iter()
            .enumerate()
            .map(|(index, field)| {
                let location = match self.options.locations {
                    LocationStrategy::Body => ParameterLocation::Body,
                    LocationStrategy::Inferred => infer_location(method, field),
                };
                EndpointParameter {
                    name: parameter_name(index, &field.name),
                    type_text: field.type_text.clone(),
                    location,
                }
            })
            .collect();

        for parameter in parameters
            .iter()
            .filter(|p| p.location == ParameterLocation::Path)
        {
            path.push_str(&format!("/{{{}}}", parameter.name));
        }

        EndpointDescriptor {
            method,
            path,
            function_name: function.name.clone(),
            parameters,
            responses: shape_responses(&function.results),
        }
    }

    /// Design the whole API.
    ///
    /// The result has exactly one endpoint per input function, in input
    /// order. Under [`DuplicatePolicy::Reject`] the first `(method, path)`
    /// collision fails the design.
    pub fn design(&self, functions: &[FunctionDescriptor]) -> Result<ApiModel, DesignError> {
        let mut endpoints = Vec::with_capacity(functions.len());
        // Keyed by route shape: `/get-user/{id}` and `/get-user/{userId}` collide
        let mut seen: HashMap<(HttpMethod, String), usize> = HashMap::new();

        for (index, function) in functions.iter().enumerate() {
            let endpoint = self.design_endpoint(function);
            debug!(
                function = %function.name,
                method = %endpoint.method,
                path = %endpoint.path,
                "Designed endpoint"
            );

            let key = endpoint.route_key();
            if let Some(&first_index) = seen.get(&key) {
                let first = &functions[first_index];
                match self.options.duplicates {
                    DuplicatePolicy::Reject => {
                        return Err(DesignError::DuplicateEndpoint {
                            method: endpoint.method,
                            path: endpoint.path,
                            first: first.name.clone(),
                            first_origin: first.origin.clone(),
                            second: function.name.clone(),
                            second_origin: function.origin.clone(),
                        });
                    }
                    DuplicatePolicy::Allow => {
                        warn!(
                            method = %endpoint.method,
                            path = %endpoint.path,
                            first = %first.name,
                            second = %function.name,
                            "Duplicate endpoint kept"
                        );
                    }
                }
            } else {
                seen.insert(key, index);
            }

            endpoints.push(endpoint);
        }

        info!(endpoints = endpoints.len(), "API design complete");
        Ok(ApiModel::new(endpoints))
    }
}

/// Design with the given options.
pub fn design(
    functions: &[FunctionDescriptor],
    options: DesignOptions,
) -> Result<ApiModel, DesignError> {
    EndpointDesigner::new(options).design(functions)
}
