//! Attach/detach lifecycle of frame elements.
//!
//! A [`Bridge`] is created once per registration and holds the read-only base
//! URL together with the [`RenderBackend`]. Each element gets its own [`Frame`],
//! which walks through validate, describe, connect and mount on every attachment.

use core::mem;
use std::rc::Rc;

use crate::{descriptor::ConnectionDescriptor, error::FrameError};

/// Attribute naming the file a frame renders.
pub const FILE_ATTRIBUTE: &str = "file";

/// DOM state a frame reads while attaching.
pub trait FrameSource {
    /// Returns the raw value of attribute `name`, or `None` when it is absent.
    fn attribute(&self, name: &str) -> Option<String>;

    /// Returns the path of the page the element currently lives in.
    ///
    /// # Errors
    ///
    /// Returns an error if the page location cannot be read.
    fn current_route(&self) -> Result<String, FrameError>;
}

/// Constructs rendering clients and mounts them into elements.
pub trait RenderBackend {
    /// Element the client renders into.
    type Target: FrameSource + ?Sized;
    /// Handle to a constructed client.
    type Client;

    /// Constructs a client for `descriptor`.
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be constructed.
    fn connect(&self, descriptor: &ConnectionDescriptor) -> Result<Self::Client, FrameError>;

    /// Mounts `client` into `target`.
    ///
    /// # Errors
    ///
    /// Returns an error if mounting fails.
    fn mount(&self, target: &Self::Target, client: &Self::Client) -> Result<(), FrameError>;

    /// Releases a client once its element leaves the document.
    ///
    /// # Errors
    ///
    /// Returns an error if the target cannot be cleaned up.
    fn release(&self, target: &Self::Target, client: Self::Client) -> Result<(), FrameError> {
        let _ = target;
        drop(client);
        Ok(())
    }
}

/// Shared state of every frame registered under one tag.
#[derive(Debug)]
pub struct Bridge<B> {
    base_url: Rc<str>,
    backend: B,
}

impl<B: RenderBackend> Bridge<B> {
    /// Creates a bridge. `base_url` is fixed for the bridge's lifetime.
    pub fn new(base_url: impl Into<Rc<str>>, backend: B) -> Self {
        Self {
            base_url: base_url.into(),
            backend,
        }
    }

    /// Returns the base URL shared by all frames.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the rendering backend.
    #[must_use]
    pub const fn backend(&self) -> &B {
        &self.backend
    }

    /// Derives the connection descriptor for `target`.
    ///
    /// # Errors
    ///
    /// Returns [`FrameError::MissingAttribute`] when `target` has no `file`
    /// attribute, or the error of [`FrameSource::current_route`].
    pub fn describe(&self, target: &B::Target) -> Result<ConnectionDescriptor, FrameError> {
        let file = target
            .attribute(FILE_ATTRIBUTE)
            .ok_or(FrameError::MissingAttribute {
                attribute: FILE_ATTRIBUTE,
            })?;
        let route = target.current_route()?;
        Ok(ConnectionDescriptor::new(&*self.base_url, route, &file))
    }
}

/// Lifecycle state of a single frame element.
#[derive(Debug)]
pub enum FrameState<C> {
    /// Not attached, or detached after a previous attachment.
    Unconfigured,
    /// A client is constructed and mounted into the element.
    Mounted {
        /// Descriptor the client was built from.
        descriptor: ConnectionDescriptor,
        /// The mounted client.
        client: C,
    },
    /// The last attachment failed. Nothing was mounted.
    Failed,
}

/// Per-element bridge state.
#[derive(Debug)]
pub struct Frame<C> {
    state: FrameState<C>,
}

impl<C> Default for Frame<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Frame<C> {
    /// Creates an unconfigured frame.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: FrameState::Unconfigured,
        }
    }

    /// Returns the current state.
    #[must_use]
    pub const fn state(&self) -> &FrameState<C> {
        &self.state
    }

    /// Returns `true` while a client is mounted.
    #[must_use]
    pub const fn is_mounted(&self) -> bool {
        matches!(self.state, FrameState::Mounted { .. })
    }

    /// Returns the descriptor of the mounted client, if any.
    #[must_use]
    pub const fn descriptor(&self) -> Option<&ConnectionDescriptor> {
        match &self.state {
            FrameState::Mounted { descriptor, .. } => Some(descriptor),
            _ => None,
        }
    }

    /// Runs the attachment sequence for `target`.
    ///
    /// A client still mounted from an earlier attachment is released first.
    ///
    /// # Errors
    ///
    /// Any error leaves the frame in [`FrameState::Failed`]. A missing `file`
    /// attribute fails before a client is constructed.
    pub fn attach<B>(&mut self, bridge: &Bridge<B>, target: &B::Target) -> Result<(), FrameError>
    where
        B: RenderBackend<Client = C>,
    {
        self.detach(bridge, target)?;

        let descriptor = bridge.describe(target).inspect_err(|err| {
            tracing::warn!(error = %err, "frame not attached");
            self.state = FrameState::Failed;
        })?;
        let client = bridge
            .backend
            .connect(&descriptor)
            .and_then(|client| {
                bridge.backend.mount(target, &client)?;
                Ok(client)
            })
            .inspect_err(|err| {
                tracing::warn!(error = %err, query = descriptor.query(), "frame failed to mount");
                self.state = FrameState::Failed;
            })?;

        tracing::debug!(
            url = descriptor.url(),
            route = descriptor.route(),
            query = descriptor.query(),
            "frame mounted"
        );
        self.state = FrameState::Mounted { descriptor, client };
        Ok(())
    }

    /// Releases the mounted client, if any, and returns to
    /// [`FrameState::Unconfigured`].
    ///
    /// # Errors
    ///
    /// Propagates the error of [`RenderBackend::release`].
    pub fn detach<B>(&mut self, bridge: &Bridge<B>, target: &B::Target) -> Result<(), FrameError>
    where
        B: RenderBackend<Client = C>,
    {
        match mem::replace(&mut self.state, FrameState::Unconfigured) {
            FrameState::Mounted { descriptor, client } => {
                tracing::debug!(query = descriptor.query(), "frame released");
                bridge.backend.release(target, client)
            }
            FrameState::Unconfigured | FrameState::Failed => Ok(()),
        }
    }
}
