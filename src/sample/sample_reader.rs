use std::path::Path;
use std::io;

use super::sample_struct::{Sample, invalid_data};


/// A struct that returns [`Sample`].
/// Using this struct, one can read a delimited text file to [`Sample`].
/// # Example
/// The following code is a simple example to read a tab separated file
/// whose last column is the class label.
/// ```no_run
/// use miniclassify::SampleReader;
/// let filename = "/path/to/train.txt";
/// let sample = SampleReader::new()
///     .file(filename)
///     .delimiter('\t')
///     .read()
///     .unwrap();
/// ```
pub struct SampleReader<P> {
    file: Option<P>,
    has_header: bool,
    delimiter: char,
    target: Option<String>,
}


impl<P> SampleReader<P> {
    /// Construct a new instance of [`SampleReader`].
    pub fn new() -> Self {
        Self {
            file: None,
            has_header: false,
            delimiter: ',',
            target: None,
        }
    }


    /// Set the flag whether the file has the header row or not.
    /// Default is `false.`
    pub fn has_header(mut self, flag: bool) -> Self {
        self.has_header = flag;
        self
    }


    /// Set the column delimiter.
    /// A space delimiter splits on any run of whitespaces.
    /// Default is `','`.
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }
}


impl<P> Default for SampleReader<P> {
    fn default() -> Self {
        Self::new()
    }
}


impl<P> SampleReader<P>
    where P: AsRef<Path>
{
    /// Set the file name.
    pub fn file(mut self, file: P) -> Self {
        self.file = Some(file);
        self
    }


    /// Set the column name that is used for target label.
    /// The each item of the column takes value in `{0, 1}.`
    /// If not set, the last column is used.
    pub fn target_feature<S: ToString>(mut self, column: S) -> Self {
        self.target = Some(column.to_string());
        self
    }


    /// Reads the file based on the arguments,
    /// and returns `std::io::Result<Sample>`.
    /// This method consumes `self.`
    pub fn read(self) -> io::Result<Sample> {
        let file = self.file
            .ok_or_else(|| invalid_data("The file name is not set"))?;

        let sample = Sample::from_csv(file, self.has_header, self.delimiter)?;
        if sample.shape().1 == 0 {
            return Err(invalid_data("The file has no column."));
        }

        let sample = match self.target {
            Some(target) => {
                if sample.features().iter().all(|f| f.name() != target) {
                    return Err(invalid_data(format!(
                        "The target class \"{target}\" does not exist"
                    )));
                }
                sample.set_target(&target)
            },
            None => sample.set_target_last(),
        };
        Ok(sample)
    }
}
