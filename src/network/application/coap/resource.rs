//! Resource descriptors and the path → resource table

use super::{CoapError, ContentBuffer, MAX_PATH_LEN, MAX_RESOURCES, Method, Request, Response};
use crate::board::Peripherals;
use core::fmt::Write;
use heapless::FnvIndexMap;

/// Callback answering one method on one resource.
///
/// Handlers read sensors and drive LEDs through the injected [`Peripherals`]
/// and never fail: content negotiation mismatches leave the response unset.
pub type Handler = fn(&Request<'_>, &mut Response, &mut dyn Peripherals);

/// A resource: link attributes plus one optional handler per method.
#[derive(Clone, Copy)]
pub struct Resource {
    /// CoRE link attributes, e.g. `title="SW1"`
    pub attributes: &'static str,
    /// GET handler
    pub get: Option<Handler>,
    /// POST handler
    pub post: Option<Handler>,
    /// PUT handler
    pub put: Option<Handler>,
    /// DELETE handler
    pub delete: Option<Handler>,
    /// Whether clients may observe the resource
    pub observable: bool,
}

impl Resource {
    /// A resource with attributes and no handlers.
    pub const fn new(attributes: &'static str) -> Self {
        Self {
            attributes,
            get: None,
            post: None,
            put: None,
            delete: None,
            observable: false,
        }
    }

    /// Answer GET with `handler`.
    pub const fn get(mut self, handler: Handler) -> Self {
        self.get = Some(handler);
        self
    }

    /// Answer POST with `handler`.
    pub const fn post(mut self, handler: Handler) -> Self {
        self.post = Some(handler);
        self
    }

    /// Answer PUT with `handler`.
    pub const fn put(mut self, handler: Handler) -> Self {
        self.put = Some(handler);
        self
    }

    /// Mark the resource as observable.
    pub const fn observable(mut self) -> Self {
        self.observable = true;
        self
    }

    /// Handler registered for `method`
    pub fn handler(&self, method: Method) -> Option<Handler> {
        match method {
            Method::Get => self.get,
            Method::Post => self.post,
            Method::Put => self.put,
            Method::Delete => self.delete,
        }
    }
}

impl core::fmt::Debug for Resource {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Resource")
            .field("attributes", &self.attributes)
            .field("get", &self.get.is_some())
            .field("post", &self.post.is_some())
            .field("put", &self.put.is_some())
            .field("delete", &self.delete.is_some())
            .field("observable", &self.observable)
            .finish()
    }
}

/// Resource table keyed by path.
///
/// Filled once during startup; afterwards the node only hands out shared
/// references, so the set of resources cannot change while serving.
/// Iteration follows registration order.
pub struct ResourceTable {
    resources: FnvIndexMap<&'static str, Resource, MAX_RESOURCES>,
}

impl ResourceTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self {
            resources: FnvIndexMap::new(),
        }
    }

    /// Register `resource` under `path`.
    pub fn register(&mut self, path: &'static str, resource: Resource) -> Result<(), CoapError> {
        if path.len() > MAX_PATH_LEN {
            return Err(CoapError::PathTooLong);
        }
        if self.resources.contains_key(path) {
            return Err(CoapError::DuplicatePath);
        }
        self.resources
            .insert(path, resource)
            .map_err(|_| CoapError::RegistryFull)?;
        log::trace!("registered resource {}", path);
        Ok(())
    }

    /// Resource registered at `path`
    pub fn get(&self, path: &str) -> Option<&Resource> {
        self.resources.get(path)
    }

    /// Number of registered resources
    pub fn len(&self) -> usize {
        self.resources.len()
    }

    /// True when nothing is registered
    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    /// Registered `(path, resource)` pairs in registration order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Resource)> {
        self.resources.iter().map(|(path, resource)| (*path, resource))
    }

    /// Run the handler for `request` and return what it produced.
    ///
    /// Unknown paths report [`CoapError::NotFound`], known paths without a
    /// handler for the method report [`CoapError::MethodNotAllowed`]; the
    /// engine turns those into 4.04 and 4.05.
    pub fn dispatch(
        &self,
        request: &Request<'_>,
        peripherals: &mut dyn Peripherals,
    ) -> Result<Response, CoapError> {
        let resource = self.get(request.path).ok_or(CoapError::NotFound)?;
        let handler = resource
            .handler(request.method)
            .ok_or(CoapError::MethodNotAllowed)?;

        log::trace!("{} {}", request.method.as_str(), request.path);
        let mut response = Response::new();
        handler(request, &mut response, peripherals);
        Ok(response)
    }

    /// Render the table in CoRE link format, as served from
    /// `/.well-known/core`.
    ///
    /// Output that does not fit in `out` is truncated.
    pub fn link_format<const N: usize>(&self, out: &mut ContentBuffer<N>) {
        for (index, (path, resource)) in self.iter().enumerate() {
            if index > 0 {
                let _ = out.write_char(',');
            }
            let _ = write!(out, "</{}>", path);
            if !resource.attributes.is_empty() {
                let _ = write!(out, ";{}", resource.attributes);
            }
        }
    }
}

impl Default for ResourceTable {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for ResourceTable {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
