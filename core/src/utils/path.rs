use std::path::Path;

pub trait PathExtension {
    fn norm_path(&self) -> String;

    /// if path is empty, represent it by "."
    fn display_path(&self) -> String;
}

impl<T> PathExtension for T
where
    T: AsRef<Path>,
{
    /// normalize path if needed
    fn norm_path(&self) -> String {
        let mut path = self.as_ref().to_string_lossy().replace('\\', "/");
        while path.ends_with('/') {
            path.pop();
        }
        path
    }

    fn display_path(&self) -> String {
        let path = self.norm_path();
        match path.is_empty() {
            true => String::from("."),
            false => path,
        }
    }
}
