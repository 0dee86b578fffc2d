
use rstest::*;
use vcd_testutils::*;

use super::*;
