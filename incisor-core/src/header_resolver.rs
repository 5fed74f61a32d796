//! C5: the Header resolver. Turns a raw `Location` produced by the
//! Locator into the `Header` the Ranker and Include matcher actually
//! reason about, recognizing the two locations that never correspond to
//! an ordinary project header: the main file itself, and the sentinel
//! path `ast_walker` uses for compiler builtins and predefined macros.

use crate::ast_walker::{BUILTIN_SENTINEL_FILE, MAIN_FILE_SENTINEL};
use crate::types::{Header, Location};
use std::path::Path;

pub struct HeaderResolver<'a> {
    main_file: &'a Path,
}

impl<'a> HeaderResolver<'a> {
    pub fn new(main_file: &'a Path) -> Self {
        Self { main_file }
    }

    pub fn resolve(&self, location: &Location) -> Header {
        match location {
            Location::StandardLibrary(spelling) => Header::StandardLibrary(spelling.clone()),
            Location::Physical(source_location) => {
                if source_location.file.as_os_str() == BUILTIN_SENTINEL_FILE {
                    Header::Builtin
                } else if source_location.file.as_os_str() == MAIN_FILE_SENTINEL
                    || source_location.file == self.main_file
                {
                    Header::MainFile
                } else {
                    Header::Physical(source_location.file.clone())
                }
            }
        }
    }

    /// Resolves every `(Location, is_definition)` pair the Locator (C4)
    /// returned, keeping the definition flag alongside each `Header` for
    /// the Ranker's Complete hint (§4.4/§4.6).
    pub fn resolve_all(&self, locations: &[(Location, bool)]) -> Vec<(Header, bool)> {
        locations
            .iter()
            .map(|(location, is_definition)| (self.resolve(location), *is_definition))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SourceLocation;
    use std::path::PathBuf;

    #[test]
    fn recognizes_main_file() {
        let main = PathBuf::from("main.cpp");
        let resolver = HeaderResolver::new(&main);
        let header = resolver.resolve(&Location::Physical(SourceLocation::new("main.cpp", 3, 0)));
        assert_eq!(header, Header::MainFile);
    }

    #[test]
    fn recognizes_builtin_sentinel() {
        let main = PathBuf::from("main.cpp");
        let resolver = HeaderResolver::new(&main);
        let header = resolver.resolve(&Location::Physical(SourceLocation::new(
            BUILTIN_SENTINEL_FILE,
            0,
            0,
        )));
        assert_eq!(header, Header::Builtin);
    }

    #[test]
    fn ordinary_header_stays_physical() {
        let main = PathBuf::from("main.cpp");
        let resolver = HeaderResolver::new(&main);
        let header = resolver.resolve(&Location::Physical(SourceLocation::new("widget.h", 1, 0)));
        assert_eq!(header, Header::Physical(PathBuf::from("widget.h")));
    }
}
