use super::*;
use crate::traits::*;
use crate::editor::*;

use flo_raster::*;
