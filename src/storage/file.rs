//! File-based storage backend
//!
//! Records live under a single storage root:
//!
//! ```text
//! .complaint-desk/
//!   counters.yaml      # next id per record kind
//!   users.yaml         # roster maintained by the identity collaborator
//!   tickets/<id>.yaml
//!   comments/<id>.yaml
//! ```
//!
//! Individual record writes go through a temp-file-and-rename under an
//! internal lock, so concurrent callers can interleave whole operations but
//! never observe a partially written record. Read-modify-write sequences that
//! span multiple calls are intentionally not guarded (last writer wins).

use crate::core::{CommentId, Role, Ticket, TicketComment, TicketId, UserId, UserRef};
use crate::error::{ComplaintDeskError, Result};
use crate::storage::repository::{CommentRepository, TicketRepository, UserDirectory};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

#[derive(Debug, Default, Serialize, Deserialize)]
struct Counters {
    next_ticket_id: i64,
    next_comment_id: i64,
}

/// File-backed implementation of the persistence gateway
pub struct FileStorage {
    root: PathBuf,
    write_lock: Mutex<()>,
}

impl FileStorage {
    /// Create a storage handle rooted at the given directory
    ///
    /// The directory is not created here; call [`FileStorage::init`] once per
    /// storage root.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// The storage root directory
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create the storage layout if it does not exist yet
    pub fn init(&self) -> Result<()> {
        fs::create_dir_all(self.tickets_dir())?;
        fs::create_dir_all(self.comments_dir())?;
        if !self.counters_file().exists() {
            self.write_yaml(
                &self.counters_file(),
                &Counters {
                    next_ticket_id: 1,
                    next_comment_id: 1,
                },
            )?;
        }
        if !self.users_file().exists() {
            self.write_yaml::<Vec<UserRef>>(&self.users_file(), &Vec::new())?;
        }
        Ok(())
    }

    /// Whether the storage layout exists
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.tickets_dir().is_dir() && self.comments_dir().is_dir()
    }

    fn ensure_initialized(&self) -> Result<()> {
        if self.is_initialized() {
            Ok(())
        } else {
            Err(ComplaintDeskError::StorageNotInitialized)
        }
    }

    fn tickets_dir(&self) -> PathBuf {
        self.root.join("tickets")
    }

    fn comments_dir(&self) -> PathBuf {
        self.root.join("comments")
    }

    fn counters_file(&self) -> PathBuf {
        self.root.join("counters.yaml")
    }

    fn users_file(&self) -> PathBuf {
        self.root.join("users.yaml")
    }

    fn ticket_path(&self, id: TicketId) -> PathBuf {
        self.tickets_dir().join(format!("{id}.yaml"))
    }

    fn comment_path(&self, id: CommentId) -> PathBuf {
        self.comments_dir().join(format!("{id}.yaml"))
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, ()> {
        self.write_lock.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Serialize a value to a temp file, then rename it into place
    fn write_yaml<T: Serialize>(&self, path: &Path, value: &T) -> Result<()> {
        let content = serde_yaml::to_string(value)?;
        let tmp = path.with_extension("yaml.tmp");
        fs::write(&tmp, content)?;
        fs::rename(&tmp, path)?;
        Ok(())
    }

    fn read_yaml<T: for<'de> Deserialize<'de>>(&self, path: &Path) -> Result<T> {
        let content = fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&content)?)
    }

    fn read_counters(&self) -> Result<Counters> {
        if self.counters_file().exists() {
            self.read_yaml(&self.counters_file())
        } else {
            Ok(Counters {
                next_ticket_id: 1,
                next_comment_id: 1,
            })
        }
    }

    /// Load every record in a directory, skipping non-YAML entries
    fn load_dir<T: for<'de> Deserialize<'de>>(&self, dir: &Path) -> Result<Vec<T>> {
        let mut records = Vec::new();
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) == Some("yaml") {
                records.push(self.read_yaml(&path)?);
            }
        }
        Ok(records)
    }

    fn load_users(&self) -> Result<Vec<UserRef>> {
        if self.users_file().exists() {
            self.read_yaml(&self.users_file())
        } else {
            Ok(Vec::new())
        }
    }

    /// Replace the user roster
    ///
    /// Test and seeding convenience; the roster is owned by the identity
    /// collaborator, and nothing in the services writes it.
    pub fn write_users(&self, users: &[UserRef]) -> Result<()> {
        self.ensure_initialized()?;
        let _guard = self.lock();
        self.write_yaml(&self.users_file(), &users.to_vec())
    }
}

impl TicketRepository for FileStorage {
    fn add_ticket(&self, mut ticket: Ticket) -> Result<Ticket> {
        self.ensure_initialized()?;
        let _guard = self.lock();

        let mut counters = self.read_counters()?;
        ticket.id = TicketId::new(counters.next_ticket_id);
        counters.next_ticket_id += 1;
        self.write_yaml(&self.counters_file(), &counters)?;

        self.write_yaml(&self.ticket_path(ticket.id), &ticket)?;
        Ok(ticket)
    }

    fn update_ticket(&self, ticket: &Ticket) -> Result<()> {
        self.ensure_initialized()?;
        let _guard = self.lock();

        let path = self.ticket_path(ticket.id);
        if !path.exists() {
            return Err(ComplaintDeskError::TicketNotFound { id: ticket.id });
        }
        self.write_yaml(&path, ticket)
    }

    fn remove_ticket(&self, id: TicketId) -> Result<()> {
        self.ensure_initialized()?;
        let _guard = self.lock();

        let path = self.ticket_path(id);
        if !path.exists() {
            return Err(ComplaintDeskError::TicketNotFound { id });
        }
        fs::remove_file(&path)?;

        // Cascade: drop every comment owned by the ticket.
        for entry in fs::read_dir(self.comments_dir())? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("yaml") {
                continue;
            }
            let comment: TicketComment = self.read_yaml(&path)?;
            if comment.ticket_id == id {
                fs::remove_file(&path)?;
            }
        }
        Ok(())
    }

    fn load_ticket(&self, id: TicketId) -> Result<Ticket> {
        self.ensure_initialized()?;
        let path = self.ticket_path(id);
        if !path.exists() {
            return Err(ComplaintDeskError::TicketNotFound { id });
        }
        self.read_yaml(&path)
    }

    fn load_all_tickets(&self) -> Result<Vec<Ticket>> {
        self.ensure_initialized()?;
        self.load_dir(&self.tickets_dir())
    }
}

impl CommentRepository for FileStorage {
    fn add_comment(&self, mut comment: TicketComment) -> Result<TicketComment> {
        self.ensure_initialized()?;
        let _guard = self.lock();

        let mut counters = self.read_counters()?;
        comment.id = CommentId::new(counters.next_comment_id);
        counters.next_comment_id += 1;
        self.write_yaml(&self.counters_file(), &counters)?;

        self.write_yaml(&self.comment_path(comment.id), &comment)?;
        Ok(comment)
    }

    fn update_comment(&self, comment: &TicketComment) -> Result<()> {
        self.ensure_initialized()?;
        let _guard = self.lock();

        let path = self.comment_path(comment.id);
        if !path.exists() {
            return Err(ComplaintDeskError::CommentNotFound { id: comment.id });
        }
        self.write_yaml(&path, comment)
    }

    fn remove_comment(&self, id: CommentId) -> Result<()> {
        self.ensure_initialized()?;
        let _guard = self.lock();

        let path = self.comment_path(id);
        if !path.exists() {
            return Err(ComplaintDeskError::CommentNotFound { id });
        }
        fs::remove_file(&path)?;
        Ok(())
    }

    fn load_comment(&self, id: CommentId) -> Result<TicketComment> {
        self.ensure_initialized()?;
        let path = self.comment_path(id);
        if !path.exists() {
            return Err(ComplaintDeskError::CommentNotFound { id });
        }
        self.read_yaml(&path)
    }

    fn load_ticket_comments(&self, ticket_id: TicketId) -> Result<Vec<TicketComment>> {
        self.ensure_initialized()?;
        let mut comments: Vec<TicketComment> = self
            .load_dir::<TicketComment>(&self.comments_dir())?
            .into_iter()
            .filter(|c| c.ticket_id == ticket_id)
            .collect();
        comments.sort_by_key(|c| c.id);
        Ok(comments)
    }
}

impl UserDirectory for FileStorage {
    fn find_user(&self, id: &UserId) -> Result<Option<UserRef>> {
        Ok(self.load_users()?.into_iter().find(|u| &u.id == id))
    }

    fn users_in_role(&self, role: Role) -> Result<Vec<UserRef>> {
        Ok(self
            .load_users()?
            .into_iter()
            .filter(|u| u.has_role(role))
            .collect())
    }
}
