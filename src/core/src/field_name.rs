// Copyright 2025 Katapult Rust Contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

/// Names the model field a reference was classified into.
///
/// Returned by the `lookup` constructors on the per-resource reference enums
/// so callers can tell whether an ambiguous input string was treated as an ID
/// or as the resource's secondary key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldName {
    Address,
    Fqdn,
    Id,
    Name,
    ObjectId,
    Permalink,
    SubDomain,
}
