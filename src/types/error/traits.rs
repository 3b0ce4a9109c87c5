use super::{Error, Repr};
use crate::types::LazyError;
use core::fmt::{self, Debug, Display, Write};
use std::error::Error as StdError;
use std::io;

const JOINED_HEADER: &str = "the following errors occurred:";

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            return self.fmt_cascaded(f);
        }
        match &*self.repr {
            Repr::Root(message) => f.write_str(message),
            Repr::Wrapped { message, source } => write!(f, "{message}: {source}"),
            Repr::Joined(components) => {
                for (index, component) in components.iter().enumerate() {
                    if index > 0 {
                        f.write_str("; ")?;
                    }
                    Display::fmt(component, f)?;
                }
                Ok(())
            }
            Repr::Lazy(lazy) => match lazy.get() {
                Some(resolved) => Display::fmt(resolved, f),
                None => Ok(()),
            },
            Repr::Foreign(inner) => Display::fmt(inner, f),
        }
    }
}

impl Error {
    /// Multi-line rendering used by `{:#}`: one bullet per joined component,
    /// nested aggregates indented under their bullet.
    fn fmt_cascaded(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &*self.repr {
            Repr::Wrapped { message, source } => write!(f, "{message}: {source:#}"),
            Repr::Joined(components) => {
                f.write_str(JOINED_HEADER)?;
                let mut buffer = String::new();
                for component in components {
                    buffer.clear();
                    write!(buffer, "{component:#}")?;
                    f.write_str("\n -  ")?;
                    f.write_str(&buffer.replace('\n', "\n    "))?;
                }
                Ok(())
            }
            Repr::Lazy(lazy) => match lazy.get() {
                Some(resolved) => write!(f, "{resolved:#}"),
                None => Ok(()),
            },
            Repr::Root(_) | Repr::Foreign(_) => write!(f, "{self}"),
        }
    }
}

impl Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &*self.repr {
            Repr::Root(message) => f.debug_tuple("Root").field(message).finish(),
            Repr::Wrapped { message, source } => f
                .debug_struct("Wrapped")
                .field("message", message)
                .field("source", source)
                .finish(),
            Repr::Joined(components) => f
                .debug_tuple("Joined")
                .field(&components.as_slice())
                .finish(),
            Repr::Lazy(lazy) => Debug::fmt(lazy, f),
            Repr::Foreign(inner) => f.debug_tuple("Foreign").field(inner).finish(),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match &*self.repr {
            Repr::Wrapped { source, .. } => Some(source),
            Repr::Lazy(lazy) => lazy.get().and_then(|resolved| resolved.source()),
            Repr::Foreign(inner) => inner.source(),
            Repr::Root(_) | Repr::Joined(_) => None,
        }
    }
}

impl From<io::Error> for Error {
    #[inline]
    fn from(error: io::Error) -> Self {
        Self::foreign(error)
    }
}

impl From<Box<dyn StdError + Send + Sync + 'static>> for Error {
    #[inline]
    fn from(error: Box<dyn StdError + Send + Sync + 'static>) -> Self {
        Self::from_boxed(error)
    }
}

impl From<String> for Error {
    #[inline]
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl From<&str> for Error {
    #[inline]
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<LazyError> for Error {
    #[inline]
    fn from(lazy: LazyError) -> Self {
        Self::from_repr(Repr::Lazy(lazy))
    }
}
