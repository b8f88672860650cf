use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;

use crate::kernel::error::Result as KernelResult;
use crate::kernel::service::KernelService;
use crate::view::error::ViewError;
use crate::view::node::Node;

/// The fully rendered document handed to a host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument {
    pub title: String,
    /// Root of the rendered tree
    pub body: Node,
    /// Serialized form of `body`
    pub html: String,
}

/// Where rendered output attaches.
///
/// The shell renders exactly one document and attaches it once; hosts only
/// need to accept that document and release it again at unmount.
pub trait DocumentHost: Send + Sync {
    /// Get the name of this host
    fn name(&self) -> &'static str;

    /// Attach the rendered document
    fn attach(&self, document: &RenderedDocument) -> Result<(), ViewError>;

    /// Release the previously attached document
    fn detach(&self) -> Result<(), ViewError>;
}

/// Built-in host that writes the rendered document to stdout.
#[derive(Debug, Default)]
pub struct ConsoleDocumentHost;

impl DocumentHost for ConsoleDocumentHost {
    fn name(&self) -> &'static str {
        "console"
    }

    fn attach(&self, document: &RenderedDocument) -> Result<(), ViewError> {
        println!("=== {} ===", document.title);
        println!("{}", document.html);
        Ok(())
    }

    fn detach(&self) -> Result<(), ViewError> {
        println!("(document detached)");
        Ok(())
    }
}

/// Kernel service owning the document host and the attached state.
pub struct DefaultDocumentManager {
    host: Arc<dyn DocumentHost>,
    attached: Mutex<Option<RenderedDocument>>,
}

impl DefaultDocumentManager {
    pub fn new(host: Arc<dyn DocumentHost>) -> Self {
        Self {
            host,
            attached: Mutex::new(None),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Option<RenderedDocument>> {
        match self.attached.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Attach a rendered document to the host
    pub fn attach(&self, document: RenderedDocument) -> Result<(), ViewError> {
        self.host.attach(&document)?;
        *self.lock() = Some(document);
        Ok(())
    }

    /// Detach the current document, if any
    pub fn detach(&self) -> Result<(), ViewError> {
        if self.lock().take().is_some() {
            self.host.detach()?;
        }
        Ok(())
    }

    /// Snapshot of the currently attached document
    pub fn current(&self) -> Option<RenderedDocument> {
        self.lock().clone()
    }

    pub fn is_attached(&self) -> bool {
        self.lock().is_some()
    }

    /// Name of the underlying host
    pub fn host_name(&self) -> &'static str {
        self.host.name()
    }
}

impl fmt::Debug for DefaultDocumentManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DefaultDocumentManager")
            .field("host", &self.host.name())
            .field("attached", &self.is_attached())
            .finish()
    }
}

#[async_trait]
impl KernelService for DefaultDocumentManager {
    fn name(&self) -> &'static str {
        "document-manager"
    }

    async fn initialize(&self) -> KernelResult<()> {
        Ok(())
    }

    async fn start(&self) -> KernelResult<()> {
        Ok(())
    }

    async fn stop(&self) -> KernelResult<()> {
        self.detach()?;
        Ok(())
    }
}
