/*!
 * Data Structures
 *
 * Specialized value types shared across the crate:
 * - Bounded inline strings for program names
 */

mod program_name;

pub use program_name::{NameTooLong, ProgramName};
