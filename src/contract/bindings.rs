//! ABI binding for the Pantheon contract.

use alloy::sol;

sol! {
    /// Pantheon registry: whitelist, ERC404 factory and CID ledger.
    #[sol(rpc)]
    #[derive(Debug)]
    contract Pantheon {
        /// Emitted when a new ERC404 token is deployed by the factory.
        event ERC404Created(uint256 indexed id, address indexed contractAddress);

        function addToWhitelist(address account) external;
        function isWhitelisted(address account) external view returns (bool);
        function createERC404(string name, string symbol, uint8 decimals, uint256 id, address owner) external;
        function addCIDs(uint256 id, address owner, string[] cids) external;
        function getContribution(uint256 id, address owner) external view returns (uint256);
        function getCIDs(uint256 id, address owner) external view returns (string[]);
    }
}
