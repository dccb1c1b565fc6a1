//! Tests for the parser module

use super::*;
use crate::parser::test_utils::{parse_ok, postfix};

mod parentheses;
